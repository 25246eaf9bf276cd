#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        // Entities register under their aliases, not as "Model".
        assert!(components.schemas.contains_key("User"));
        assert!(components.schemas.contains_key("Goal"));
        assert!(components.schemas.contains_key("Career"));
        assert!(!components.schemas.contains_key("Model"));

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_every_route_is_documented() {
        let openapi = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/logout",
            "/api/auth/me",
            "/api/dashboard/stats",
            "/api/profile",
            "/api/goals",
            "/api/goals/recent",
            "/api/goals/{goal_id}",
            "/api/careers",
            "/api/careers/recommended",
            "/api/careers/{career_id}",
            "/api/opportunities",
            "/api/opportunities/latest",
            "/api/opportunities/saved",
            "/api/opportunities/{opportunity_id}",
            "/api/opportunities/{opportunity_id}/save",
            "/api/opportunities/{opportunity_id}/save/check",
            "/api/resources",
            "/api/resources/{resource_id}",
            "/api/resources/{resource_id}/download",
            "/api/training-programs",
            "/api/training-programs/{program_id}",
            "/api/progress/skills",
            "/api/progress/skills/{skill_name}",
            "/api/academic-modules",
            "/api/academic-modules/{module_id}",
            "/api/students/ranking",
            "/api/admin/students",
            "/api/admin/students/{student_id}/profile",
            "/api/admin/students/{student_id}/analytics",
        ] {
            assert!(
                openapi.paths.paths.contains_key(path),
                "missing path {path}"
            );
        }
    }

    #[test]
    fn test_error_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            error_response_schema
        {
            assert!(obj.properties.contains_key("error"));
        } else {
            panic!("ErrorResponse should be an object schema");
        }
    }
}
