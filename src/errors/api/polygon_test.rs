#[cfg(test)]
mod tests {
    use crate::errors::PolygonApiError;
    use crate::errors::internal::{InternalError, PolygonError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let db_err = DbErr::Custom("disk I/O error".to_string());
        let internal_err = InternalError::database("insert_polygon", db_err);
        let api_err = PolygonApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.message(), "An internal error occurred");
    }

    #[test]
    fn test_parse_error_converts_to_internal_server_error() {
        let internal_err = InternalError::parse("points", "expected value at line 1 column 1");
        let api_err = PolygonApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
        assert!(!api_err.message().contains("line 1"));
    }

    #[test]
    fn test_not_found_converts_to_404() {
        let internal_err = InternalError::from(PolygonError::NotFound("abc-123".to_string()));
        let api_err = PolygonApiError::from_internal_error(internal_err);

        assert!(matches!(api_err, PolygonApiError::NotFound(_)));
        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.message(), "Polygon abc-123 not found");
    }

    #[test]
    fn test_too_few_points_converts_to_400() {
        let internal_err = InternalError::from(PolygonError::TooFewPoints { count: 2 });
        let api_err = PolygonApiError::from_internal_error(internal_err);

        assert!(matches!(api_err, PolygonApiError::BadRequest(_)));
        assert_eq!(api_err.status_code(), 400);
        assert!(api_err.message().contains("at least 3 points"));
    }

    #[test]
    fn test_blank_name_converts_to_400() {
        let api_err: PolygonApiError = InternalError::from(PolygonError::BlankName).into();

        assert_eq!(api_err.status_code(), 400);
        assert_eq!(api_err.to_string(), "Validation failed: Polygon name must not be blank");
    }

    #[test]
    fn test_invalid_point_message_names_index() {
        let api_err: PolygonApiError =
            InternalError::from(PolygonError::invalid_point(4, "expected [x, y]")).into();

        assert_eq!(api_err.status_code(), 400);
        assert!(api_err.message().contains("index 4"));
    }
}
