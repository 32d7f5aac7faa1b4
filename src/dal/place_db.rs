use sqlx::{PgConnection, PgPool};

use crate::domain::place::Place;

pub async fn search_places(
    con: &mut PgConnection,
    keywords: &[String],
    limit: i64,
) -> Result<Vec<Place>, sqlx::Error> {
    let patterns: Vec<String> = keywords.iter().map(|k| ilike_pattern(k)).collect();
    let joined = keywords.join(" ");

    sqlx::query_as::<_, Place>(
        r"
        select
            p.name,
            p.description,
            p.contact_number,
            p.rating,
            p.image_url
        from
            places p,
            plainto_tsquery('english', $1) query
        where
            p.search_vector @@ query
            or p.name ilike any($2)
            or p.description ilike any($2)
        order by
            ts_rank_cd(p.search_vector, query) desc,
            similarity(p.name, $1) desc,
            p.id asc
        limit $3
        ",
    )
    .bind(&joined)
    .bind(&patterns)
    .bind(limit)
    .fetch_all(&mut *con)
    .await
}

pub async fn check_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("select now()").execute(pool).await?;
    Ok(())
}

/// `%keyword%` with LIKE metacharacters escaped so the keyword matches literally.
fn ilike_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_");
    format!("%{}%", escaped)
}
