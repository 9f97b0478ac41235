//! Report export handlers.
//!
//! Export the full non-deleted user list as CSV, Excel, or PDF. Exports are
//! read-only and carry no role requirement, like the listing itself.
//! Passwords never appear in exports.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use roster_model::StoredUser;
use roster_persistence::core::UserStore;
use roster_persistence::types::UserQuery;
use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

const EXPORT_COLUMNS: [&str; 8] = [
    "First Name",
    "Last Name",
    "Contact",
    "Email",
    "Address",
    "Role",
    "Status",
    "Created At",
];

fn export_fields(user: &StoredUser) -> [String; 8] {
    [
        user.first_name.clone(),
        user.last_name.clone(),
        user.contact.clone(),
        user.email.clone(),
        user.address.clone(),
        user.role.to_string(),
        if user.is_active { "Active" } else { "Inactive" }.to_string(),
        user.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}

async fn all_users<S>(state: &AppState<S>) -> RestResult<Vec<StoredUser>>
where
    S: UserStore + Send + Sync,
{
    Ok(state.store().list(&UserQuery::default()).await?.users)
}

fn attachment(content_type: &str, extension: &str, body: Vec<u8>) -> Response {
    let filename = format!(
        "users_{}.{}",
        chrono::Utc::now().format("%Y-%m-%d"),
        extension
    );
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Handler for CSV export.
///
/// # HTTP Request
///
/// `GET /users/export/csv`
pub async fn export_csv_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    let users = all_users(&state).await?;

    let csv_error = |e: csv::Error| RestError::InternalError {
        message: format!("Failed to build CSV export: {}", e),
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_COLUMNS).map_err(csv_error)?;
    for user in &users {
        writer.write_record(export_fields(user)).map_err(csv_error)?;
    }
    let body = writer.into_inner().map_err(|e| RestError::InternalError {
        message: format!("Failed to build CSV export: {}", e),
    })?;

    debug!(rows = users.len(), "CSV export built");
    Ok(attachment("text/csv", "csv", body))
}

/// Handler for Excel export.
///
/// # HTTP Request
///
/// `GET /users/export/xlsx`
pub async fn export_xlsx_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    let users = all_users(&state).await?;

    let xlsx_error = |e: rust_xlsxwriter::XlsxError| RestError::InternalError {
        message: format!("Failed to build Excel export: {}", e),
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Users").map_err(xlsx_error)?;

    for (col, title) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *title)
            .map_err(xlsx_error)?;
    }
    for (row, user) in users.iter().enumerate() {
        for (col, value) in export_fields(user).iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, value.as_str())
                .map_err(xlsx_error)?;
        }
    }

    let body = workbook.save_to_buffer().map_err(xlsx_error)?;

    debug!(rows = users.len(), "Excel export built");
    Ok(attachment(
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xlsx",
        body,
    ))
}

/// Handler for PDF export.
///
/// Requires [`crate::ServerConfig::export_font_dir`] to point at a directory
/// with the configured TTF font family; answers 501 until it does.
///
/// # HTTP Request
///
/// `GET /users/export/pdf`
pub async fn export_pdf_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    let font_dir = state.config().export_font_dir.clone().ok_or_else(|| {
        RestError::NotImplemented {
            feature: "PDF export (no export font directory configured)".to_string(),
        }
    })?;

    let users = all_users(&state).await?;

    let pdf_error = |e: genpdf::error::Error| RestError::InternalError {
        message: format!("Failed to build PDF export: {}", e),
    };

    let font_family =
        genpdf::fonts::from_files(&font_dir, &state.config().export_font_family, None)
            .map_err(pdf_error)?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title("Roster Users");
    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    doc.push(genpdf::elements::Paragraph::new(format!(
        "Roster Users ({})",
        users.len()
    )));
    for user in &users {
        let fields = export_fields(user);
        doc.push(genpdf::elements::Paragraph::new(format!(
            "{} {} | {} | {} | {} | {} | {}",
            fields[0], fields[1], fields[2], fields[3], fields[4], fields[5], fields[6],
        )));
    }

    let mut body = Vec::new();
    doc.render(&mut body).map_err(pdf_error)?;

    debug!(rows = users.len(), "PDF export built");
    Ok(attachment("application/pdf", "pdf", body))
}
