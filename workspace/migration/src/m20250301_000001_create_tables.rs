use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Users
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(User::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(User::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(User::Password).string().not_null())
                    .col(ColumnDef::new(User::Name).string().not_null())
                    .col(ColumnDef::new(User::Role).string_len(20).not_null())
                    .col(ColumnDef::new(User::YearLevel).integer())
                    .col(ColumnDef::new(User::Course).string())
                    .col(ColumnDef::new(User::AvatarUrl).string())
                    .to_owned(),
            )
            .await?;

        // 2. Profiles (1:1 with users)
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profile::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Profile::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Profile::Gpa).float())
                    .col(ColumnDef::new(Profile::Skills).json())
                    .col(ColumnDef::new(Profile::Interests).json())
                    .col(ColumnDef::new(Profile::CareerPreferences).json())
                    .col(ColumnDef::new(Profile::Certifications).json())
                    .col(ColumnDef::new(Profile::SubjectsTaken).json())
                    .col(ColumnDef::new(Profile::ResumeUrl).string())
                    .col(ColumnDef::new(Profile::Bio).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-profile-user")
                            .from(Profile::Table, Profile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Goals
        manager
            .create_table(
                Table::create()
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Goal::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Goal::UserId).uuid().not_null())
                    .col(ColumnDef::new(Goal::Title).string().not_null())
                    .col(ColumnDef::new(Goal::Description).string())
                    .col(ColumnDef::new(Goal::Type).string_len(20).not_null())
                    .col(ColumnDef::new(Goal::Specific).string())
                    .col(ColumnDef::new(Goal::Measurable).string())
                    .col(ColumnDef::new(Goal::Achievable).string())
                    .col(ColumnDef::new(Goal::Relevant).string())
                    .col(ColumnDef::new(Goal::TimeBound).string())
                    .col(ColumnDef::new(Goal::Progress).integer().not_null().default(0))
                    .col(ColumnDef::new(Goal::Status).string_len(20).not_null())
                    .col(ColumnDef::new(Goal::TargetDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Goal::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-goal-user")
                            .from(Goal::Table, Goal::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. Careers catalog
        manager
            .create_table(
                Table::create()
                    .table(Career::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Career::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Career::Title).string().not_null())
                    .col(ColumnDef::new(Career::Description).string().not_null())
                    .col(ColumnDef::new(Career::Overview).string())
                    .col(ColumnDef::new(Career::RequiredSkills).json())
                    .col(ColumnDef::new(Career::RecommendedTools).json())
                    .col(ColumnDef::new(Career::SalaryRange).string())
                    .col(ColumnDef::new(Career::Industry).string())
                    .col(ColumnDef::new(Career::LearningPath).json())
                    .col(ColumnDef::new(Career::Icon).string())
                    .to_owned(),
            )
            .await?;

        // 5. Opportunities catalog
        manager
            .create_table(
                Table::create()
                    .table(Opportunity::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Opportunity::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Opportunity::Title).string().not_null())
                    .col(ColumnDef::new(Opportunity::Company).string().not_null())
                    .col(ColumnDef::new(Opportunity::Description).string().not_null())
                    .col(ColumnDef::new(Opportunity::Location).string())
                    .col(ColumnDef::new(Opportunity::Type).string_len(20).not_null())
                    .col(ColumnDef::new(Opportunity::Industry).string())
                    .col(ColumnDef::new(Opportunity::RequiredSkills).json())
                    .col(ColumnDef::new(Opportunity::ApplicationUrl).string())
                    .col(ColumnDef::new(Opportunity::Deadline).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Opportunity::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Opportunity::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 6. Saved opportunities (bookmarks), unique per (user, opportunity)
        manager
            .create_table(
                Table::create()
                    .table(SavedOpportunity::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SavedOpportunity::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SavedOpportunity::UserId).uuid().not_null())
                    .col(ColumnDef::new(SavedOpportunity::OpportunityId).uuid().not_null())
                    .col(
                        ColumnDef::new(SavedOpportunity::SavedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-saved-opportunity-user")
                            .from(SavedOpportunity::Table, SavedOpportunity::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-saved-opportunity-opportunity")
                            .from(SavedOpportunity::Table, SavedOpportunity::OpportunityId)
                            .to(Opportunity::Table, Opportunity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq-saved-opportunity-user-opportunity")
                    .table(SavedOpportunity::Table)
                    .col(SavedOpportunity::UserId)
                    .col(SavedOpportunity::OpportunityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 7. Resources catalog
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Resource::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Resource::Title).string().not_null())
                    .col(ColumnDef::new(Resource::Description).string())
                    .col(ColumnDef::new(Resource::Type).string_len(20).not_null())
                    .col(ColumnDef::new(Resource::Category).string().not_null())
                    .col(ColumnDef::new(Resource::Url).string())
                    .col(ColumnDef::new(Resource::Tags).json())
                    .col(
                        ColumnDef::new(Resource::DownloadCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Resource::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 8. Progress records (append-only skill log)
        manager
            .create_table(
                Table::create()
                    .table(ProgressRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressRecord::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgressRecord::UserId).uuid().not_null())
                    .col(ColumnDef::new(ProgressRecord::SkillName).string().not_null())
                    .col(
                        ColumnDef::new(ProgressRecord::Level)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProgressRecord::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-progress-record-user")
                            .from(ProgressRecord::Table, ProgressRecord::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-progress-record-user-recorded-at")
                    .table(ProgressRecord::Table)
                    .col(ProgressRecord::UserId)
                    .col(ProgressRecord::RecordedAt)
                    .to_owned(),
            )
            .await?;

        // 9. Academic modules
        manager
            .create_table(
                Table::create()
                    .table(AcademicModule::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicModule::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AcademicModule::UserId).uuid().not_null())
                    .col(ColumnDef::new(AcademicModule::ModuleName).string().not_null())
                    .col(ColumnDef::new(AcademicModule::Grade).string())
                    .col(ColumnDef::new(AcademicModule::Units).integer())
                    .col(ColumnDef::new(AcademicModule::Semester).string())
                    .col(
                        ColumnDef::new(AcademicModule::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-academic-module-user")
                            .from(AcademicModule::Table, AcademicModule::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 10. Training programs catalog
        manager
            .create_table(
                Table::create()
                    .table(TrainingProgram::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingProgram::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrainingProgram::Title).string().not_null())
                    .col(ColumnDef::new(TrainingProgram::Description).string())
                    .col(ColumnDef::new(TrainingProgram::Provider).string())
                    .col(ColumnDef::new(TrainingProgram::Duration).string())
                    .col(ColumnDef::new(TrainingProgram::Skills).json())
                    .col(
                        ColumnDef::new(TrainingProgram::CertificationOffered)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(TrainingProgram::Url).string())
                    .col(
                        ColumnDef::new(TrainingProgram::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order.
        manager
            .drop_table(Table::drop().table(TrainingProgram::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicModule::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProgressRecord::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SavedOpportunity::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Opportunity::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Career::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Goal::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Password,
    Name,
    Role,
    YearLevel,
    Course,
    AvatarUrl,
}

#[derive(DeriveIden)]
enum Profile {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    UserId,
    Gpa,
    Skills,
    Interests,
    CareerPreferences,
    Certifications,
    SubjectsTaken,
    ResumeUrl,
    Bio,
}

#[derive(DeriveIden)]
enum Goal {
    #[sea_orm(iden = "goals")]
    Table,
    Id,
    UserId,
    Title,
    Description,
    Type,
    Specific,
    Measurable,
    Achievable,
    Relevant,
    TimeBound,
    Progress,
    Status,
    TargetDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Career {
    #[sea_orm(iden = "careers")]
    Table,
    Id,
    Title,
    Description,
    Overview,
    RequiredSkills,
    RecommendedTools,
    SalaryRange,
    Industry,
    LearningPath,
    Icon,
}

#[derive(DeriveIden)]
enum Opportunity {
    #[sea_orm(iden = "opportunities")]
    Table,
    Id,
    Title,
    Company,
    Description,
    Location,
    Type,
    Industry,
    RequiredSkills,
    ApplicationUrl,
    Deadline,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SavedOpportunity {
    #[sea_orm(iden = "saved_opportunities")]
    Table,
    Id,
    UserId,
    OpportunityId,
    SavedAt,
}

#[derive(DeriveIden)]
enum Resource {
    #[sea_orm(iden = "resources")]
    Table,
    Id,
    Title,
    Description,
    Type,
    Category,
    Url,
    Tags,
    DownloadCount,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProgressRecord {
    #[sea_orm(iden = "progress_records")]
    Table,
    Id,
    UserId,
    SkillName,
    Level,
    RecordedAt,
}

#[derive(DeriveIden)]
enum AcademicModule {
    #[sea_orm(iden = "academic_modules")]
    Table,
    Id,
    UserId,
    ModuleName,
    Grade,
    Units,
    Semester,
    Completed,
}

#[derive(DeriveIden)]
enum TrainingProgram {
    #[sea_orm(iden = "training_programs")]
    Table,
    Id,
    Title,
    Description,
    Provider,
    Duration,
    Skills,
    CertificationOffered,
    Url,
    IsActive,
}
