// Coordinators layer - Workflow orchestration
//
// Coordinators sequence store operations for specific API endpoints and CLI
// commands. Validation happens before they are called.
pub mod polygon_coordinator;

pub use polygon_coordinator::PolygonCoordinator;
