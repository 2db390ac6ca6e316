// src/infrastructure/bootstrap.rs
use crate::application::{
    error::ApplicationResult,
    ports::{ClockPort, PasswordHasherPort},
};
use crate::domain::category::{CategoryName, CategoryRepository, NewCategory};
use crate::domain::slug::{Slug, slugify};
use crate::domain::user::{
    Email, NewUser, PasswordHash, Role, UserProfile, UserRepository, Username,
};

const DEFAULT_CATEGORIES: [(&str, &str); 6] = [
    ("Technology", "Latest technology news"),
    ("Medicine", "Medical breakthroughs"),
    ("Space & Physics", "Space exploration and physics"),
    ("Environment", "Environmental science"),
    ("AI & Computing", "Artificial Intelligence news"),
    ("Biology", "Biological sciences"),
];

const ADMIN_USERNAME: &str = "admin";
const ADMIN_EMAIL: &str = "admin@chronicle-news.com";

/// One-time setup on an empty database: the stock category set, plus an
/// admin account when a bootstrap password is configured. Safe to run on
/// every start; existing records are left alone.
pub async fn seed_defaults(
    user_repo: &dyn UserRepository,
    category_repo: &dyn CategoryRepository,
    password_hasher: &PasswordHasherPort,
    clock: &ClockPort,
    admin_password: Option<&str>,
) -> ApplicationResult<()> {
    seed_categories(category_repo, clock).await?;
    seed_admin(user_repo, password_hasher, clock, admin_password).await?;
    Ok(())
}

async fn seed_categories(
    category_repo: &dyn CategoryRepository,
    clock: &ClockPort,
) -> ApplicationResult<()> {
    for (name, description) in DEFAULT_CATEGORIES {
        let slug = Slug::new(slugify(name))?;
        if category_repo.find_by_slug(&slug).await?.is_some() {
            continue;
        }

        category_repo
            .insert(NewCategory {
                name: CategoryName::new(name)?,
                slug,
                description: Some(description.to_string()),
                created_at: clock.now(),
            })
            .await?;
        tracing::info!(category = name, "seeded default category");
    }

    Ok(())
}

async fn seed_admin(
    user_repo: &dyn UserRepository,
    password_hasher: &PasswordHasherPort,
    clock: &ClockPort,
    admin_password: Option<&str>,
) -> ApplicationResult<()> {
    let Some(password) = admin_password else {
        return Ok(());
    };

    if user_repo.count().await? > 0 {
        return Ok(());
    }

    let hash = password_hasher.hash(password).await?;
    user_repo
        .insert(NewUser::new(
            Username::new(ADMIN_USERNAME)?,
            Email::new(ADMIN_EMAIL)?,
            PasswordHash::new(hash)?,
            Role::Admin,
            UserProfile::new("Administrator", Some("System Administrator".into()), None)?,
            clock.now(),
        ))
        .await?;
    tracing::info!(username = ADMIN_USERNAME, "seeded bootstrap admin account");

    Ok(())
}
