mod artists;
mod health;
mod metrics;
mod news;
mod ratings;
mod schedule;
mod stages;
mod tickets;
mod users;

pub use artists::{create_artist, list_artists, search_artists};
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use news::{create_news, list_news};
pub use ratings::{create_rating, list_ratings};
pub use schedule::{create_schedule_entry, list_schedule};
pub use stages::{create_stage, list_stages};
pub use tickets::{create_ticket, list_tickets};
pub use users::{create_user, list_users};
