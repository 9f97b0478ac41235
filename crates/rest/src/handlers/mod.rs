//! HTTP request handlers for the Roster API.
//!
//! This module contains handlers for all operations:
//!
//! - [`login`] - Credential check
//! - [`list`] - List users with search, filter, sort, pagination
//! - [`create`] - Create a single user
//! - [`update`] - Edit a user
//! - [`delete`] - Soft-delete a user
//! - [`status`] - Toggle the active/inactive flag
//! - [`profile_image`] - Upload a profile image
//! - [`bulk`] - Import template download and bulk upload
//! - [`export`] - CSV/Excel/PDF report export
//! - [`health`] - Health check endpoints

pub mod bulk;
pub mod create;
pub mod delete;
pub mod export;
pub mod health;
pub mod list;
pub mod login;
pub mod profile_image;
pub mod status;
pub mod update;

// Re-export handlers for convenience
pub use bulk::{bulk_upload_handler, template_handler};
pub use create::create_handler;
pub use delete::delete_handler;
pub use export::{export_csv_handler, export_pdf_handler, export_xlsx_handler};
pub use health::health_handler;
pub use list::list_handler;
pub use login::login_handler;
pub use profile_image::profile_image_handler;
pub use status::status_handler;
pub use update::update_handler;
