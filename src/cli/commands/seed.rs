use anyhow::Result;
use chrono::Utc;
use model::StringList;
use model::entities::{career, opportunity, profile, resource, training_program, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::password::hash_password;

/// Seeds the admin account and a starter catalog.
///
/// Safe to run repeatedly: every insert is skipped when a row with the same
/// email (users) or title (catalogs) already exists.
pub async fn seed_database(database_url: &str, admin_email: &str, admin_password: &str) -> Result<()> {
    info!("Seeding database");
    let db = Database::connect(database_url).await?;

    seed_admin(&db, admin_email, admin_password).await?;
    seed_students(&db).await?;
    seed_careers(&db).await?;
    seed_opportunities(&db).await?;
    seed_resources(&db).await?;
    seed_training_programs(&db).await?;

    info!("Database seeding completed successfully!");
    Ok(())
}

async fn seed_admin(db: &DatabaseConnection, email: &str, password: &str) -> Result<()> {
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?;
    if existing.is_some() {
        debug!("Admin account {} already exists, skipping", email);
        return Ok(());
    }

    let admin = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password: Set(hash_password(password)?),
        name: Set("Administrator".to_string()),
        role: Set(user::Role::Admin),
        year_level: Set(None),
        course: Set(None),
        avatar_url: Set(None),
    };
    admin.insert(db).await?;
    info!("Admin account {} created", email);
    Ok(())
}

async fn seed_students(db: &DatabaseConnection) -> Result<()> {
    let demo = [
        (
            "maria.santos@waypoint.local",
            "Maria Santos",
            3,
            Some(3.4_f32),
            vec!["Python", "SQL", "Git"],
            vec!["Data Science", "Backend Development"],
        ),
        (
            "juan.delacruz@waypoint.local",
            "Juan Dela Cruz",
            2,
            Some(2.9_f32),
            vec!["C", "Networking"],
            vec!["Embedded Systems"],
        ),
    ];

    for (email, name, year, gpa, skills, interests) in demo {
        let exists = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?
            .is_some();
        if exists {
            debug!("Student {} already exists, skipping", email);
            continue;
        }

        let student = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            password: Set(hash_password("changeme123")?),
            name: Set(name.to_string()),
            role: Set(user::Role::Student),
            year_level: Set(Some(year)),
            course: Set(Some("Computer Engineering".to_string())),
            avatar_url: Set(None),
        };
        let created = student.insert(db).await?;

        let student_profile = profile::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(created.id),
            gpa: Set(gpa),
            skills: Set(Some(StringList::from(skills))),
            interests: Set(Some(StringList::from(interests))),
            career_preferences: Set(Some(StringList::default())),
            certifications: Set(Some(StringList::default())),
            subjects_taken: Set(Some(StringList::default())),
            resume_url: Set(None),
            bio: Set(None),
        };
        student_profile.insert(db).await?;
    }
    info!("Demo student accounts seeded");
    Ok(())
}

async fn seed_careers(db: &DatabaseConnection) -> Result<()> {
    let catalog = [
        (
            "Software Engineer",
            "Design, develop, and maintain software applications and systems",
            vec!["JavaScript", "Python", "Java", "Git", "SQL", "REST APIs"],
            vec!["VS Code", "GitHub", "Docker", "Postman"],
            "$70,000 - $150,000",
            "Technology",
            "Code",
        ),
        (
            "Embedded Systems Engineer",
            "Develop software for embedded hardware and IoT devices",
            vec!["C", "C++", "ARM", "RTOS", "Debugging", "Linux"],
            vec!["Keil", "STM32CubeIDE", "JTAG Debugger"],
            "$75,000 - $145,000",
            "Electronics/IoT",
            "Microchip",
        ),
        (
            "Network Engineer",
            "Design, implement, and maintain computer networks",
            vec!["TCP/IP", "Routing/Switching", "Cisco", "Firewalls", "Network Security"],
            vec!["Cisco Packet Tracer", "Wireshark", "GNS3"],
            "$60,000 - $130,000",
            "Networking",
            "Network",
        ),
    ];

    for (title, description, skills, tools, salary, industry, icon) in catalog {
        let exists = career::Entity::find()
            .filter(career::Column::Title.eq(title))
            .one(db)
            .await?
            .is_some();
        if exists {
            debug!("Career '{}' already exists, skipping", title);
            continue;
        }
        let row = career::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            overview: Set(None),
            required_skills: Set(Some(StringList::from(skills))),
            recommended_tools: Set(Some(StringList::from(tools))),
            salary_range: Set(Some(salary.to_string())),
            industry: Set(Some(industry.to_string())),
            learning_path: Set(Some(json!({
                "beginner": ["Learn the fundamentals"],
                "intermediate": ["Build real projects"],
                "advanced": ["Specialize and lead"],
            }))),
            icon: Set(Some(icon.to_string())),
        };
        row.insert(db).await?;
    }
    info!("Career catalog seeded");
    Ok(())
}

async fn seed_opportunities(db: &DatabaseConnection) -> Result<()> {
    let catalog = [
        (
            "Software Engineering Intern",
            "Tech Solutions Inc.",
            "Join our development team to build scalable web applications.",
            opportunity::OpportunityKind::Internship,
            "Technology",
            vec!["JavaScript", "React", "Git"],
        ),
        (
            "Junior Full Stack Developer",
            "WebDev Studios",
            "Build modern web applications for clients across various industries.",
            opportunity::OpportunityKind::Job,
            "Technology",
            vec!["React", "TypeScript", "PostgreSQL"],
        ),
    ];

    for (title, company, description, kind, industry, skills) in catalog {
        let exists = opportunity::Entity::find()
            .filter(opportunity::Column::Title.eq(title))
            .one(db)
            .await?
            .is_some();
        if exists {
            debug!("Opportunity '{}' already exists, skipping", title);
            continue;
        }
        let row = opportunity::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            company: Set(company.to_string()),
            description: Set(description.to_string()),
            location: Set(None),
            kind: Set(kind),
            industry: Set(Some(industry.to_string())),
            required_skills: Set(Some(StringList::from(skills))),
            application_url: Set(None),
            deadline: Set(None),
            is_active: Set(true),
            created_at: Set(Utc::now()),
        };
        row.insert(db).await?;
    }
    info!("Opportunity catalog seeded");
    Ok(())
}

async fn seed_resources(db: &DatabaseConnection) -> Result<()> {
    let catalog = [
        (
            "Introduction to Python Programming",
            "Comprehensive guide covering Python basics and data structures",
            resource::ResourceKind::Pdf,
            "Programming",
            vec!["Python", "Beginner"],
        ),
        (
            "Professional Resume Template - Engineering",
            "Resume template tailored for engineering students",
            resource::ResourceKind::Template,
            "Career",
            vec!["Resume", "Career"],
        ),
    ];

    for (title, description, kind, category, tags) in catalog {
        let exists = resource::Entity::find()
            .filter(resource::Column::Title.eq(title))
            .one(db)
            .await?
            .is_some();
        if exists {
            debug!("Resource '{}' already exists, skipping", title);
            continue;
        }
        let row = resource::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            description: Set(Some(description.to_string())),
            kind: Set(kind),
            category: Set(category.to_string()),
            url: Set(None),
            tags: Set(Some(StringList::from(tags))),
            download_count: Set(0),
            created_at: Set(Utc::now()),
        };
        row.insert(db).await?;
    }
    info!("Resource catalog seeded");
    Ok(())
}

async fn seed_training_programs(db: &DatabaseConnection) -> Result<()> {
    let catalog = [
        (
            "AWS Cloud Practitioner Certification",
            "Learn cloud computing fundamentals and prepare for AWS certification",
            "Amazon Web Services",
            "4 weeks",
            vec!["Cloud Computing", "AWS", "DevOps"],
            true,
        ),
        (
            "Full Stack Web Development Bootcamp",
            "Intensive program covering React, Node.js, and deployment",
            "FreeCodeCamp",
            "12 weeks",
            vec!["React", "Node.js", "JavaScript"],
            true,
        ),
    ];

    for (title, description, provider, duration, skills, certified) in catalog {
        let exists = training_program::Entity::find()
            .filter(training_program::Column::Title.eq(title))
            .one(db)
            .await?
            .is_some();
        if exists {
            debug!("Training program '{}' already exists, skipping", title);
            continue;
        }
        let row = training_program::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            description: Set(Some(description.to_string())),
            provider: Set(Some(provider.to_string())),
            duration: Set(Some(duration.to_string())),
            skills: Set(Some(StringList::from(skills))),
            certification_offered: Set(certified),
            url: Set(None),
            is_active: Set(true),
        };
        row.insert(db).await?;
    }
    info!("Training program catalog seeded");
    Ok(())
}
