

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::{episode, movie, season, series, user};

pub(crate) async fn insert_user(db: &DatabaseConnection, name: &str) -> anyhow::Result<user::Model> {
    let am = user::ActiveModel {
        username: Set(name.to_string()),
        email: Set(format!("{name}@example.com")),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub(crate) async fn insert_movie(db: &DatabaseConnection, title: &str) -> anyhow::Result<movie::Model> {
    let am = movie::ActiveModel {
        title: Set(title.to_string()),
        release_year: Set(Some(2021)),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub(crate) async fn insert_series(db: &DatabaseConnection, title: &str) -> anyhow::Result<series::Model> {
    let am = series::ActiveModel {
        title: Set(title.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub(crate) async fn insert_season(db: &DatabaseConnection, series_id: i32, number: i32) -> anyhow::Result<season::Model> {
    let am = season::ActiveModel {
        season_number: Set(number),
        series_id: Set(series_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub(crate) async fn insert_episode(db: &DatabaseConnection, season_id: i32, number: i32) -> anyhow::Result<episode::Model> {
    let am = episode::ActiveModel {
        episode_number: Set(number),
        title: Set(format!("Episode {number}")),
        season_id: Set(season_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
