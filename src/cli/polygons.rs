use crate::coordinators::PolygonCoordinator;
use crate::errors::internal::PolygonError;
use crate::errors::InternalError;
use crate::types::internal::Polygon;

/// One-line summary used by `list`
pub fn summary_line(polygon: &Polygon) -> String {
    format!(
        "{}  {:<24}  {} points  {}",
        polygon.id,
        polygon.name,
        polygon.points.len(),
        polygon.created_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    )
}

/// Multi-line detail used by `show`
pub fn detail_lines(polygon: &Polygon) -> Vec<String> {
    let mut lines = vec![
        format!("Polygon {}", polygon.id),
        format!("  Name:    {}", polygon.name),
        format!("  Created: {}", polygon.created_at.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)),
        format!("  Points:  {}", polygon.points.len()),
    ];
    lines.extend(
        polygon
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("    {:>3}: ({}, {})", i, p.x(), p.y())),
    );
    lines
}

pub async fn list_polygons(coordinator: &PolygonCoordinator) -> Result<(), Box<dyn std::error::Error>> {
    let polygons = coordinator.list().await?;

    if polygons.is_empty() {
        println!("No polygons stored.");
        return Ok(());
    }

    println!("{} polygon(s):", polygons.len());
    for polygon in &polygons {
        println!("  {}", summary_line(polygon));
    }

    Ok(())
}

pub async fn show_polygon(coordinator: &PolygonCoordinator, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    match coordinator.get(id).await {
        Ok(polygon) => {
            for line in detail_lines(&polygon) {
                println!("{}", line);
            }
            Ok(())
        }
        Err(InternalError::Polygon(PolygonError::NotFound(_))) => {
            println!("❌ Error: no polygon with id {}", id);
            Err(format!("Polygon {} not found", id).into())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_polygon(coordinator: &PolygonCoordinator, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    match coordinator.delete(id).await {
        Ok(()) => {
            println!("✅ Polygon {} deleted.", id);
            Ok(())
        }
        Err(InternalError::Polygon(PolygonError::NotFound(_))) => {
            println!("❌ Error: no polygon with id {}", id);
            Err(format!("Polygon {} not found", id).into())
        }
        Err(e) => Err(e.into()),
    }
}
