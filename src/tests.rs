#[cfg(test)]
mod integration_tests {
    use crate::test_utils::test_utils::{ADMIN_EMAIL, ADMIN_PASSWORD, seed_admin, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::{TestServer, TestServerConfig};
    use serde_json::{Value, json};

    fn cookie_server(app: axum::Router) -> TestServer {
        let config = TestServerConfig {
            save_cookies: true,
            ..Default::default()
        };
        TestServer::new_with_config(app, config).unwrap()
    }

    /// Registers a student and leaves their session cookie on the server.
    async fn register_student(server: &TestServer, email: &str, name: &str) -> Value {
        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "email": email,
                "password": "hunter2hunter2",
                "name": name,
            }))
            .await;
        response.assert_status(StatusCode::OK);
        response.json()
    }

    /// Seeds an admin account and logs it in on a dedicated server.
    async fn admin_server(app: &axum::Router, db: &sea_orm::DatabaseConnection) -> TestServer {
        seed_admin(db).await;
        let server = cookie_server(app.clone());
        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}))
            .await;
        response.assert_status(StatusCode::OK);
        server
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_register_creates_student_with_session() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);

        let user = register_student(&server, "ada@example.com", "Ada").await;
        assert_eq!(user["email"], "ada@example.com");
        assert_eq!(user["role"], "student");
        assert_eq!(user["course"], "Computer Engineering");
        assert!(user.get("password").is_none(), "password must never leak");

        // The register response set a session cookie.
        let me: Value = server.get("/api/auth/me").await.json();
        assert_eq!(me["id"], user["id"]);

        // An empty profile was created alongside the account.
        let profile = server.get("/api/profile").await;
        profile.assert_status(StatusCode::OK);
        let profile: Value = profile.json();
        assert_eq!(profile["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_register_ignores_role_field() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);

        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "email": "sneaky@example.com",
                "password": "hunter2hunter2",
                "name": "Sneaky",
                "role": "admin",
            }))
            .await;
        response.assert_status(StatusCode::OK);
        let user: Value = response.json();
        assert_eq!(user["role"], "student");

        // And no admin powers follow.
        let forbidden = server.get("/api/admin/students").await;
        forbidden.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflict() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);

        register_student(&server, "dup@example.com", "First").await;
        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "email": "dup@example.com",
                "password": "hunter2hunter2",
                "name": "Second",
            }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["error"], "Email already registered");
    }

    #[tokio::test]
    async fn test_register_validates_input() {
        let (app, _state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "email": "short@example.com",
                "password": "short",
                "name": "Short",
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app.clone());
        register_student(&server, "login@example.com", "Login").await;

        let fresh = cookie_server(app);
        let wrong_password = fresh
            .post("/api/auth/login")
            .json(&json!({"email": "login@example.com", "password": "not-the-password"}))
            .await;
        wrong_password.assert_status(StatusCode::UNAUTHORIZED);

        let unknown_email = fresh
            .post("/api/auth/login")
            .json(&json!({"email": "nobody@example.com", "password": "not-the-password"}))
            .await;
        unknown_email.assert_status(StatusCode::UNAUTHORIZED);

        // Both failures read the same, so emails cannot be probed.
        let a: Value = wrong_password.json();
        let b: Value = unknown_email.json();
        assert_eq!(a["error"], b["error"]);
    }

    #[tokio::test]
    async fn test_logout_destroys_session() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);
        register_student(&server, "bye@example.com", "Bye").await;

        let response = server.post("/api/auth/logout").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);

        let me = server.get("/api/auth/me").await;
        me.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_profile_update_seeds_skill_progress() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);
        register_student(&server, "skills@example.com", "Skills").await;

        let response = server
            .put("/api/profile")
            .json(&json!({
                "gpa": 3.5,
                "skills": ["Rust", "SQL"],
                "interests": ["databases"],
            }))
            .await;
        response.assert_status(StatusCode::OK);
        let profile: Value = response.json();
        assert_eq!(profile["skills"], json!(["Rust", "SQL"]));
        assert_eq!(profile["gpa"], 3.5);

        // New skills start at level 25.
        let levels: Value = server.get("/api/progress/skills").await.json();
        let levels = levels.as_array().unwrap();
        assert_eq!(levels.len(), 2);
        assert!(levels.iter().all(|l| l["level"] == 25));

        // Re-sending an existing skill does not reseed it.
        server
            .put("/api/profile")
            .json(&json!({"skills": ["Rust", "SQL", "Networking"]}))
            .await
            .assert_status(StatusCode::OK);
        let levels: Value = server.get("/api/progress/skills").await.json();
        assert_eq!(levels.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_goal_crud() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);
        register_student(&server, "goals@example.com", "Goals").await;

        let created = server
            .post("/api/goals")
            .json(&json!({
                "title": "Learn Rust",
                "type": "short-term",
                "progress": 10,
            }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let goal: Value = created.json();
        assert_eq!(goal["status"], "in_progress");
        let goal_id = goal["id"].as_str().unwrap().to_string();

        // Progress and status move independently.
        let updated: Value = server
            .put(&format!("/api/goals/{goal_id}"))
            .json(&json!({"progress": 100}))
            .await
            .json();
        assert_eq!(updated["progress"], 100);
        assert_eq!(updated["status"], "in_progress");

        let completed: Value = server
            .put(&format!("/api/goals/{goal_id}"))
            .json(&json!({"status": "completed"}))
            .await
            .json();
        assert_eq!(completed["status"], "completed");

        let deleted = server.delete(&format!("/api/goals/{goal_id}")).await;
        deleted.assert_status(StatusCode::OK);
        let body: Value = deleted.json();
        assert_eq!(body["message"], "Goal deleted");

        server
            .get(&format!("/api/goals/{goal_id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_goals_are_scoped_to_owner() {
        let (app, _state) = setup_test_app().await;
        let owner = cookie_server(app.clone());
        register_student(&owner, "owner@example.com", "Owner").await;

        let goal: Value = owner
            .post("/api/goals")
            .json(&json!({"title": "Private goal", "type": "long-term"}))
            .await
            .json();
        let goal_id = goal["id"].as_str().unwrap();

        let intruder = cookie_server(app);
        register_student(&intruder, "intruder@example.com", "Intruder").await;

        // Foreign goals read as missing, not forbidden.
        intruder
            .get(&format!("/api/goals/{goal_id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        intruder
            .delete(&format!("/api/goals/{goal_id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let listed: Value = intruder.get("/api/goals").await.json();
        assert_eq!(listed.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_recent_goals_default_limit() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);
        register_student(&server, "recent@example.com", "Recent").await;

        for i in 0..7 {
            server
                .post("/api/goals")
                .json(&json!({"title": format!("Goal {i}"), "type": "short-term"}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let recent: Value = server.get("/api/goals/recent").await.json();
        assert_eq!(recent.as_array().unwrap().len(), 5);

        let two: Value = server.get("/api/goals/recent?limit=2").await.json();
        assert_eq!(two.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_career_recommendations_rank_by_skill_overlap() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        for (title, skills) in [
            ("Backend Engineer", json!(["Rust", "SQL", "Networking"])),
            ("Data Analyst", json!(["SQL", "Python"])),
            ("Designer", json!(["Figma"])),
        ] {
            admin
                .post("/api/careers")
                .json(&json!({
                    "title": title,
                    "description": "A career",
                    "requiredSkills": skills,
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let student = cookie_server(app.clone());
        register_student(&student, "rec@example.com", "Rec").await;
        student
            .put("/api/profile")
            .json(&json!({"skills": ["rust", "sql"]}))
            .await
            .assert_status(StatusCode::OK);

        let recommended: Value = student.get("/api/careers/recommended").await.json();
        let recommended = recommended.as_array().unwrap();
        assert_eq!(recommended.len(), 3);
        // Matching is case-insensitive; two overlaps beat one beats zero.
        assert_eq!(recommended[0]["title"], "Backend Engineer");
        assert_eq!(recommended[1]["title"], "Data Analyst");
        assert_eq!(recommended[2]["title"], "Designer");

        // The catalog itself is public.
        let public = TestServer::new(app).unwrap();
        public.get("/api/careers").await.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_career_catalog_is_title_ordered() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        for title in ["Zoologist", "Architect", "Machinist"] {
            admin
                .post("/api/careers")
                .json(&json!({"title": title, "description": "A career"}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let titles = |body: &Value| -> Vec<String> {
            body.as_array()
                .unwrap()
                .iter()
                .map(|c| c["title"].as_str().unwrap().to_string())
                .collect()
        };

        let catalog: Value = TestServer::new(app.clone())
            .unwrap()
            .get("/api/careers")
            .await
            .json();
        assert_eq!(titles(&catalog), ["Architect", "Machinist", "Zoologist"]);

        // A profile without skills falls back to the same catalog order.
        let student = cookie_server(app);
        register_student(&student, "noskills@example.com", "NoSkills").await;
        let recommended: Value = student.get("/api/careers/recommended").await.json();
        assert_eq!(titles(&recommended), ["Architect", "Machinist", "Zoologist"]);
    }

    #[tokio::test]
    async fn test_career_mutations_require_admin() {
        let (app, _state) = setup_test_app().await;
        let student = cookie_server(app);
        register_student(&student, "notadmin@example.com", "NotAdmin").await;

        let response = student
            .post("/api/careers")
            .json(&json!({"title": "Nope", "description": "Nope"}))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
        let body: Value = response.json();
        assert_eq!(body["error"], "Admin access required");
    }

    #[tokio::test]
    async fn test_opportunity_save_flow() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        let opportunity: Value = admin
            .post("/api/opportunities")
            .json(&json!({
                "title": "Summer Internship",
                "company": "Acme",
                "description": "Build things",
                "type": "internship",
            }))
            .await
            .json();
        let id = opportunity["id"].as_str().unwrap();

        let student = cookie_server(app);
        register_student(&student, "saver@example.com", "Saver").await;

        let check: Value = student
            .get(&format!("/api/opportunities/{id}/save/check"))
            .await
            .json();
        assert_eq!(check["isSaved"], false);

        student
            .post(&format!("/api/opportunities/{id}/save"))
            .await
            .assert_status(StatusCode::CREATED);
        let again = student.post(&format!("/api/opportunities/{id}/save")).await;
        again.assert_status(StatusCode::CONFLICT);

        let check: Value = student
            .get(&format!("/api/opportunities/{id}/save/check"))
            .await
            .json();
        assert_eq!(check["isSaved"], true);

        let saved: Value = student.get("/api/opportunities/saved").await.json();
        assert_eq!(saved.as_array().unwrap().len(), 1);

        student
            .delete(&format!("/api/opportunities/{id}/save"))
            .await
            .assert_status(StatusCode::OK);
        student
            .delete(&format!("/api/opportunities/{id}/save"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_inactive_opportunities_hidden_from_students() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        for (title, active) in [("Open role", true), ("Closed role", false)] {
            admin
                .post("/api/opportunities")
                .json(&json!({
                    "title": title,
                    "company": "Acme",
                    "description": "Role",
                    "type": "job",
                    "isActive": active,
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let student = cookie_server(app);
        register_student(&student, "browser@example.com", "Browser").await;
        let visible: Value = student.get("/api/opportunities").await.json();
        assert_eq!(visible.as_array().unwrap().len(), 1);
        assert_eq!(visible[0]["title"], "Open role");

        let all: Value = admin.get("/api/opportunities").await.json();
        assert_eq!(all.as_array().unwrap().len(), 2);

        let latest: Value = student.get("/api/opportunities/latest").await.json();
        assert_eq!(latest.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unusable_session_cookie_reads_as_anonymous() {
        use crate::auth::session::SESSION_COOKIE;
        use axum_extra::extract::cookie::Cookie;

        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        for (title, active) in [("Open role", true), ("Closed role", false)] {
            admin
                .post("/api/opportunities")
                .json(&json!({
                    "title": title,
                    "company": "Acme",
                    "description": "Role",
                    "type": "job",
                    "isActive": active,
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let stranger = TestServer::new(app).unwrap();

        let response = stranger
            .get("/api/opportunities")
            .add_cookie(Cookie::new(SESSION_COOKIE, "not-a-uuid"))
            .await;
        response.assert_status(StatusCode::OK);
        let visible: Value = response.json();
        assert_eq!(visible.as_array().unwrap().len(), 1);
        assert_eq!(visible[0]["title"], "Open role");

        // A well-formed id with no matching session row reads the same.
        let response = stranger
            .get("/api/opportunities")
            .add_cookie(Cookie::new(
                SESSION_COOKIE,
                uuid::Uuid::new_v4().to_string(),
            ))
            .await;
        response.assert_status(StatusCode::OK);
        let visible: Value = response.json();
        assert_eq!(visible.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_resource_download_counter() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        let resource: Value = admin
            .post("/api/resources")
            .json(&json!({
                "title": "Resume template",
                "type": "template",
                "category": "career",
            }))
            .await
            .json();
        let id = resource["id"].as_str().unwrap();
        assert_eq!(resource["downloadCount"], 0);

        // Downloads are public and each one counts.
        let public = TestServer::new(app).unwrap();
        public
            .post(&format!("/api/resources/{id}/download"))
            .await
            .assert_status(StatusCode::OK);
        let second: Value = public
            .post(&format!("/api/resources/{id}/download"))
            .await
            .json();
        assert_eq!(second["downloadCount"], 2);

        public
            .post(&format!("/api/resources/{}/download", uuid::Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resource_filters() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        for (title, kind, category) in [
            ("Intro video", "video", "learning"),
            ("Resume PDF", "pdf", "career"),
        ] {
            admin
                .post("/api/resources")
                .json(&json!({"title": title, "type": kind, "category": category}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let public = TestServer::new(app).unwrap();
        let videos: Value = public.get("/api/resources?type=video").await.json();
        assert_eq!(videos.as_array().unwrap().len(), 1);
        assert_eq!(videos[0]["title"], "Intro video");

        let career: Value = public.get("/api/resources?category=career").await.json();
        assert_eq!(career.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_training_programs_list_active_only() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        admin
            .post("/api/training-programs")
            .json(&json!({"title": "Rust Bootcamp"}))
            .await
            .assert_status(StatusCode::CREATED);
        admin
            .post("/api/training-programs")
            .json(&json!({"title": "Retired course", "isActive": false}))
            .await
            .assert_status(StatusCode::CREATED);

        let public = TestServer::new(app).unwrap();
        let programs: Value = public.get("/api/training-programs").await.json();
        let programs = programs.as_array().unwrap();
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0]["title"], "Rust Bootcamp");
    }

    #[tokio::test]
    async fn test_skill_level_updates_append() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);
        register_student(&server, "leveller@example.com", "Leveller").await;

        server
            .post("/api/progress/skills/Rust")
            .json(&json!({"level": 40}))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/progress/skills/Rust")
            .json(&json!({"level": 70}))
            .await
            .assert_status(StatusCode::CREATED);

        // Latest record wins; history stays in the table.
        let levels: Value = server.get("/api/progress/skills").await.json();
        let levels = levels.as_array().unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0]["skillName"], "Rust");
        assert_eq!(levels[0]["level"], 70);

        let out_of_range = server
            .post("/api/progress/skills/Rust")
            .json(&json!({"level": 150}))
            .await;
        out_of_range.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_academic_module_crud_scoped_to_owner() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app.clone());
        register_student(&server, "modules@example.com", "Modules").await;

        let created = server
            .post("/api/academic-modules")
            .json(&json!({"moduleName": "Databases", "units": 3, "semester": "2025-1"}))
            .await;
        created.assert_status(StatusCode::CREATED);
        let module: Value = created.json();
        assert_eq!(module["completed"], false);
        let id = module["id"].as_str().unwrap();

        let updated: Value = server
            .put(&format!("/api/academic-modules/{id}"))
            .json(&json!({"grade": "1.25", "completed": true}))
            .await
            .json();
        assert_eq!(updated["grade"], "1.25");
        assert_eq!(updated["completed"], true);

        let other = cookie_server(app);
        register_student(&other, "other@example.com", "Other").await;
        other
            .delete(&format!("/api/academic-modules/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .delete(&format!("/api/academic-modules/{id}"))
            .await
            .assert_status(StatusCode::OK);
        let listed: Value = server.get("/api/academic-modules").await.json();
        assert_eq!(listed.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_student_dashboard_stats() {
        let (app, _state) = setup_test_app().await;
        let server = cookie_server(app);
        register_student(&server, "dash@example.com", "Dash").await;

        // Zero goals means zero progress, not a division by zero.
        let empty: Value = server.get("/api/dashboard/stats").await.json();
        assert_eq!(empty["goalsCount"], 0);
        assert_eq!(empty["overallProgress"], 0);

        server
            .post("/api/goals")
            .json(&json!({"title": "A", "type": "short-term", "progress": 50}))
            .await
            .assert_status(StatusCode::CREATED);
        let done: Value = server
            .post("/api/goals")
            .json(&json!({"title": "B", "type": "short-term", "progress": 100}))
            .await
            .json();
        server
            .put(&format!("/api/goals/{}", done["id"].as_str().unwrap()))
            .json(&json!({"status": "completed"}))
            .await
            .assert_status(StatusCode::OK);
        server
            .put("/api/profile")
            .json(&json!({"skills": ["Rust"]}))
            .await
            .assert_status(StatusCode::OK);

        let stats: Value = server.get("/api/dashboard/stats").await.json();
        assert_eq!(stats["goalsCount"], 1);
        assert_eq!(stats["completedGoals"], 1);
        assert_eq!(stats["skillsCount"], 1);
        // Mean of 50 and 100.
        assert_eq!(stats["overallProgress"], 75);
    }

    #[tokio::test]
    async fn test_admin_dashboard_stats() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        let student = cookie_server(app);
        register_student(&student, "counted@example.com", "Counted").await;
        admin
            .post("/api/careers")
            .json(&json!({"title": "Engineer", "description": "Builds"}))
            .await
            .assert_status(StatusCode::CREATED);

        let stats: Value = admin.get("/api/dashboard/stats").await.json();
        assert_eq!(stats["totalStudents"], 1);
        assert_eq!(stats["totalCareers"], 1);
        assert_eq!(stats["totalOpportunities"], 0);
        assert_eq!(stats["totalResources"], 0);
    }

    #[tokio::test]
    async fn test_student_ranking() {
        let (app, _state) = setup_test_app().await;

        let strong = cookie_server(app.clone());
        register_student(&strong, "strong@example.com", "Strong").await;
        strong
            .put("/api/profile")
            .json(&json!({"skills": ["Rust", "SQL"], "gpa": 4.0}))
            .await
            .assert_status(StatusCode::OK);

        let weak = cookie_server(app);
        register_student(&weak, "weak@example.com", "Weak").await;

        let ranking: Value = weak.get("/api/students/ranking").await.json();
        assert_eq!(ranking["total"], 2);
        let board = ranking["leaderboard"].as_array().unwrap();
        assert_eq!(board[0]["name"], "Strong");
        assert_eq!(board[0]["rank"], 1);
        assert_eq!(board[1]["rank"], 2);

        // The caller sees their own row regardless of position.
        assert_eq!(ranking["currentUser"]["name"], "Weak");
    }

    #[tokio::test]
    async fn test_admin_student_views() {
        let (app, state) = setup_test_app().await;
        let admin = admin_server(&app, &state.db).await;

        let student = cookie_server(app);
        let registered = register_student(&student, "subject@example.com", "Subject").await;
        let student_id = registered["id"].as_str().unwrap();
        student
            .put("/api/profile")
            .json(&json!({"skills": ["Rust"], "gpa": 3.0}))
            .await
            .assert_status(StatusCode::OK);
        student
            .post("/api/goals")
            .json(&json!({"title": "Goal", "type": "short-term", "progress": 30}))
            .await
            .assert_status(StatusCode::CREATED);

        let students: Value = admin.get("/api/admin/students").await.json();
        assert_eq!(students.as_array().unwrap().len(), 1);

        let profile: Value = admin
            .get(&format!("/api/admin/students/{student_id}/profile"))
            .await
            .json();
        assert_eq!(profile["skills"], json!(["Rust"]));
        assert_eq!(profile["user"]["email"], "subject@example.com");

        let analytics: Value = admin
            .get(&format!("/api/admin/students/{student_id}/analytics"))
            .await
            .json();
        assert_eq!(analytics["stats"]["totalGoals"], 1);
        assert_eq!(analytics["stats"]["inProgressGoals"], 1);
        assert_eq!(analytics["stats"]["totalSkills"], 1);
        assert_eq!(analytics["progressRecords"][0]["level"], 25);

        // Unknown or non-student ids read as missing.
        admin
            .get(&format!("/api/admin/students/{}/profile", uuid::Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
