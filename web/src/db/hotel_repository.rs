#[cfg(feature = "ssr")]
use shared_types::{HotelLocation, HotelRecord};
#[cfg(feature = "ssr")]
use sqlx::{postgres::PgRow, Row};

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

/// Look up a single hotel. `Ok(None)` when no row has this id.
///
/// Reads from the `hotels` table:
///
/// ```sql
/// CREATE TABLE hotels (
///     id              TEXT PRIMARY KEY,
///     name            TEXT NOT NULL,
///     address         TEXT NOT NULL,
///     description     TEXT NOT NULL DEFAULT '',
///     images          TEXT[] NOT NULL DEFAULT '{}',
///     price_per_night DOUBLE PRECISION NOT NULL,
///     star_rating     SMALLINT NOT NULL DEFAULT 0,
///     rating          REAL NOT NULL DEFAULT 0,
///     review_count    INTEGER NOT NULL DEFAULT 0,
///     amenities       TEXT[] NOT NULL DEFAULT '{}',
///     available       BOOLEAN NOT NULL DEFAULT TRUE,
///     featured        BOOLEAN NOT NULL DEFAULT FALSE,
///     city            TEXT NOT NULL,
///     state           TEXT NOT NULL,
///     lat             DOUBLE PRECISION,
///     long            DOUBLE PRECISION
/// );
/// ```
#[cfg(feature = "ssr")]
pub async fn find_hotel_by_id(hotel_id: &str) -> DbResult<Option<HotelRecord>> {
    let pool = crate::db::pool::get_pool()?;

    let row = sqlx::query(
        "SELECT id, name, address, description, images, price_per_night,
                star_rating, rating, review_count, amenities, available,
                featured, city, state, lat, long
         FROM hotels
         WHERE id = $1",
    )
    .bind(hotel_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(hotel_from_row).transpose()
}

#[cfg(feature = "ssr")]
fn hotel_from_row(row: &PgRow) -> DbResult<HotelRecord> {
    let star_rating: i16 = row.try_get("star_rating")?;
    let review_count: i32 = row.try_get("review_count")?;

    Ok(HotelRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        description: row.try_get("description")?,
        images: row.try_get("images")?,
        price_per_night: row.try_get("price_per_night")?,
        star_rating: star_rating.clamp(0, 5) as u8,
        rating: row.try_get("rating")?,
        review_count: u32::try_from(review_count).unwrap_or(0),
        amenities: row.try_get("amenities")?,
        available: row.try_get("available")?,
        featured: row.try_get("featured")?,
        location: HotelLocation {
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            lat: row.try_get("lat")?,
            long: row.try_get("long")?,
        },
    })
}
