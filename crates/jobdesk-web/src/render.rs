//! HTML rendering for the desk page.

use jobdesk_api::{FilterField, Job, JobType, SortOrder};
use jobdesk_core::{
    ApiStatus, DeleteStrategy, DropdownOptions, FilterController, FormField, FormMode,
    InlineDelete, JobFormController, ListOrchestrator, ViewMode, delete_prompt,
};

use crate::session::Session;

/// Full desk page for the current session state. Consumes the pending
/// notice and alerts.
pub(crate) fn desk_page(session: &mut Session) -> String {
    let notice = session.take_notice();
    let alerts = session.take_alerts();

    let content = match &session.form {
        Some(form) if *session.list.view() != ViewMode::List => job_form(form),
        _ => jobs_section(&session.filters, &session.list),
    };

    page(session.list.api_status(), notice.as_deref(), &content, &alerts)
}

/// Desk page with the inline delete panel for one job.
pub(crate) fn delete_panel_page(session: &Session, panel: &InlineDelete) -> String {
    page(session.list.api_status(), None, &delete_panel(panel), &[])
}

pub(crate) fn error_page(message: &str) -> String {
    ERROR_HTML.replace("<!-- MESSAGE -->", &html_escape(message))
}

fn page(status: ApiStatus, notice: Option<&str>, content: &str, alerts: &[String]) -> String {
    let (status_class, status_label) = match status {
        ApiStatus::Checking => ("checking", "Checking"),
        ApiStatus::Connected => ("connected", "Connected"),
        ApiStatus::Disconnected => ("disconnected", "Disconnected"),
    };
    let notice_html = notice
        .map(|n| format!(r#"<div class="notice">{}</div>"#, html_escape(n)))
        .unwrap_or_default();

    let alerts_html: String = alerts
        .iter()
        .map(|a| format!("<script>window.alert({});</script>", script_string(a)))
        .collect();

    DESK_HTML
        .replace("<!-- STATUS_CLASS -->", status_class)
        .replace("<!-- STATUS_LABEL -->", status_label)
        .replace("<!-- NOTICE -->", &notice_html)
        .replace("<!-- ALERTS -->", &alerts_html)
        .replace("<!-- CONTENT -->", content)
}

fn jobs_section(filters: &FilterController, list: &ListOrchestrator) -> String {
    let mut body = String::new();

    if let Some(error) = list.error() {
        body.push_str(&format!(
            r#"<div class="error-message">Error: {}</div>"#,
            html_escape(error)
        ));
    }
    if list.is_loading() {
        body.push_str(r#"<div class="loading">Loading jobs...</div>"#);
    } else if list.is_empty_result() {
        body.push_str(
            r#"<div class="no-jobs"><p>No jobs found.</p><p>Try adjusting your filters or add a new job.</p></div>"#,
        );
    } else {
        body.push_str(r#"<div class="jobs-grid">"#);
        for job in list.jobs() {
            body.push_str(&job_card(job));
        }
        body.push_str("</div>");
    }

    JOBS_SECTION_HTML
        .replace("<!-- COUNT -->", &list.jobs().len().to_string())
        .replace("<!-- FILTERS -->", &filter_panel(filters))
        .replace("<!-- BODY -->", &body)
}

fn filter_panel(filters: &FilterController) -> String {
    let state = filters.state();
    let options = filters.options();
    let disabled = filters.options_loading();

    let sort_options: String = SortOrder::ALL
        .iter()
        .map(|s| option(s.as_str(), s.label(), state.sort == s.as_str()))
        .collect();

    let advanced = if filters.advanced_open() {
        format!(
            r#"<div class="filter-row advanced">
                <label>Location {}</label>
                <label>Tag {}</label>
            </div>"#,
            select(
                FilterField::Location,
                "All Locations",
                &options.locations,
                &state.location,
                disabled
            ),
            select(
                FilterField::Tag,
                "All Tags",
                &options.tags,
                &state.tag,
                disabled
            ),
        )
    } else {
        String::new()
    };

    let count = filters.active_filter_count();
    let toggle_label = match (filters.advanced_open(), count) {
        (true, _) => "Hide Filters".to_string(),
        (false, 0) => "More Filters".to_string(),
        (false, n) => format!("More Filters ({n})"),
    };

    let chips = active_chips(filters);

    FILTERS_HTML
        .replace("<!-- SEARCH -->", &html_escape(&state.search))
        .replace("<!-- SORT_OPTIONS -->", &sort_options)
        .replace(
            "<!-- JOB_TYPE_SELECT -->",
            &select(
                FilterField::JobType,
                "All Types",
                &job_type_choices(options),
                &state.job_type,
                disabled,
            ),
        )
        .replace("<!-- ADVANCED -->", &advanced)
        .replace("<!-- TOGGLE_LABEL -->", &toggle_label)
        .replace("<!-- CHIPS -->", &chips)
}

/// Backend job types, or the built-in set if the lookup came back empty.
fn job_type_choices(options: &DropdownOptions) -> Vec<String> {
    if options.job_types.is_empty() {
        JobType::ALL.iter().map(|t| t.as_str().to_string()).collect()
    } else {
        options.job_types.clone()
    }
}

fn active_chips(filters: &FilterController) -> String {
    let active = filters.active_filters();
    if active.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<div class="active-filters"><span>Active filters:</span>"#);
    for (field, value) in &active {
        html.push_str(&format!(
            r#"<form method="post" action="/filters/clear/{}" class="chip">
                <span>{}: {}</span><button type="submit" title="Clear">&times;</button>
            </form>"#,
            field.name(),
            field.label(),
            html_escape(value),
        ));
    }
    html.push_str(
        r#"<form method="post" action="/filters/reset"><button type="submit" class="btn btn-link">Clear All</button></form></div>"#,
    );
    html
}

fn select(
    field: FilterField,
    placeholder: &str,
    choices: &[String],
    selected: &str,
    disabled: bool,
) -> String {
    let mut html = format!(
        r#"<select name="{}"{}>"#,
        field.name(),
        if disabled { " disabled" } else { "" }
    );
    html.push_str(&option("", placeholder, selected.is_empty()));
    for choice in choices {
        html.push_str(&option(choice, choice, choice == selected));
    }
    // Keep a selection visible even when the lookup did not return it.
    if !selected.is_empty() && !choices.iter().any(|c| c == selected) {
        html.push_str(&option(selected, selected, true));
    }
    html.push_str("</select>");
    html
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}

fn job_card(job: &Job) -> String {
    let tags: String = job
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, html_escape(t)))
        .collect();
    let tags_html = if tags.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="job-tags">{tags}</div>"#)
    };

    format!(
        r#"<div class="job-card">
            <div class="job-header">
                <h3 class="job-title">{title}</h3>
                <div class="job-actions">
                    <a href="/jobs/{id}/edit" class="btn btn-secondary btn-sm">Edit</a>
                    <form method="post" action="/jobs/{id}/delete" onsubmit="this.confirmed.value = window.confirm({prompt}) ? 'yes' : 'no';">
                        <input type="hidden" name="confirmed" value="no">
                        <button type="submit" class="btn btn-danger btn-sm">Delete</button>
                    </form>
                    <a href="/jobs/{id}/delete" class="btn btn-link btn-sm">Review delete</a>
                </div>
            </div>
            <div class="job-company">{company}</div>
            <div class="job-details">
                <span class="job-location">{location}</span>
                <span class="job-type">{job_type}</span>
                <span class="job-date">Posted: {posted}</span>
            </div>
            {tags_html}
        </div>"#,
        id = job.id,
        title = html_escape(&job.title),
        company = html_escape(&job.company),
        location = html_escape(&job.location),
        job_type = job.job_type,
        posted = job.posted_label(),
        prompt = html_escape(&script_string(&delete_prompt(job))),
    )
}

fn job_form(controller: &JobFormController) -> String {
    let form = controller.form();
    let errors = controller.errors();

    let (heading, action, submit_label) = match controller.mode() {
        FormMode::Create => ("Add New Job", "/jobs".to_string(), "Add Job"),
        FormMode::Edit { id } => ("Edit Job", format!("/jobs/{id}"), "Update Job"),
    };
    let submit_label = if controller.is_loading() {
        "Saving..."
    } else {
        submit_label
    };

    let success = controller
        .success_message()
        .map(|m| format!(r#"<div class="success-message">{}</div>"#, html_escape(m)))
        .unwrap_or_default();
    let general = errors
        .general()
        .map(|m| format!(r#"<div class="error-message">{}</div>"#, html_escape(m)))
        .unwrap_or_default();

    let job_types: String = JobType::ALL
        .iter()
        .map(|t| {
            option(
                t.as_str(),
                t.as_str(),
                form.get(FormField::JobType) == t.as_str(),
            )
        })
        .collect();

    FORM_HTML
        .replace("<!-- HEADING -->", heading)
        .replace("<!-- SUCCESS -->", &success)
        .replace("<!-- GENERAL_ERROR -->", &general)
        .replace("<!-- ACTION -->", &action)
        .replace(
            "<!-- TITLE_FIELD -->",
            &text_field(controller, FormField::Title, "Job Title *", "text", "e.g. Senior Actuary"),
        )
        .replace(
            "<!-- COMPANY_FIELD -->",
            &text_field(controller, FormField::Company, "Company *", "text", "e.g. Aon"),
        )
        .replace(
            "<!-- LOCATION_FIELD -->",
            &text_field(controller, FormField::Location, "Location *", "text", "e.g. Remote"),
        )
        .replace("<!-- JOB_TYPE_OPTIONS -->", &job_types)
        .replace(
            "<!-- JOB_TYPE_ERROR -->",
            &field_error(errors.field(FormField::JobType)),
        )
        .replace(
            "<!-- TAGS_FIELD -->",
            &text_field(controller, FormField::Tags, "Tags", "text", "Comma separated, e.g. Life, Health"),
        )
        .replace(
            "<!-- POSTING_DATE_FIELD -->",
            &text_field(controller, FormField::PostingDate, "Posting Date", "date", ""),
        )
        .replace("<!-- SUBMIT_LABEL -->", submit_label)
        .replace(
            "<!-- SUBMIT_DISABLED -->",
            if controller.is_loading() { "disabled" } else { "" },
        )
}

fn text_field(
    controller: &JobFormController,
    field: FormField,
    label: &str,
    input_type: &str,
    placeholder: &str,
) -> String {
    let error = controller.errors().field(field);
    format!(
        r#"<div class="form-group">
            <label for="{name}">{label}</label>
            <input type="{input_type}" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}"{class}>
            {error}
        </div>"#,
        name = field.name(),
        value = html_escape(controller.form().get(field)),
        placeholder = html_escape(placeholder),
        class = if error.is_some() { r#" class="error""# } else { "" },
        error = field_error(error),
    )
}

fn field_error(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<span class="field-error">{}</span>"#, html_escape(e)))
        .unwrap_or_default()
}

fn delete_panel(panel: &InlineDelete) -> String {
    let job = panel.job();
    let loading = panel.is_loading();
    let disabled = if loading { "disabled" } else { "" };

    DELETE_PANEL_HTML
        .replace("<!-- ID -->", &job.id.to_string())
        .replace("<!-- TITLE -->", &html_escape(&job.title))
        .replace("<!-- COMPANY -->", &html_escape(&job.company))
        .replace("<!-- LOCATION -->", &html_escape(&job.location))
        .replace(
            "<!-- ERROR -->",
            &panel
                .error()
                .map(|e| format!(r#"<div class="error-message">{}</div>"#, html_escape(e)))
                .unwrap_or_default(),
        )
        .replace(
            "<!-- CONFIRM_LABEL -->",
            if loading { "Deleting..." } else { "Yes, Delete" },
        )
        .replace("<!-- DISABLED -->", disabled)
}

/// JSON string literal safe to embed in a `<script>` block.
fn script_string(s: &str) -> String {
    serde_json::Value::String(s.to_string())
        .to_string()
        .replace("</", "<\\/")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const DESK_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Job Listing Portal</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 1100px;
            margin: 0 auto;
            padding: 2rem;
            background: #0a0a0a;
            color: #e0e0e0;
        }
        h1, h2, h3 { color: #88c0d0; }
        a { color: #81a1c1; }
        .app-header { display: flex; justify-content: space-between; align-items: center; }
        .api-status { padding: 0.2rem 0.6rem; border-radius: 3px; font-size: 0.85rem; }
        .api-status.connected { background: #a3be8c; color: #000; }
        .api-status.disconnected { background: #bf616a; color: #fff; }
        .api-status.checking { background: #ebcb8b; color: #000; }
        .jobs-header { display: flex; justify-content: space-between; align-items: center; }
        .btn { padding: 0.5rem 1rem; background: #5e81ac; color: #fff; border: none; border-radius: 4px; text-decoration: none; cursor: pointer; font-size: 0.9rem; }
        .btn:hover { background: #81a1c1; }
        .btn:disabled { opacity: 0.5; cursor: default; }
        .btn-secondary { background: #4c566a; }
        .btn-danger { background: #bf616a; }
        .btn-link { background: none; color: #81a1c1; text-decoration: underline; }
        .btn-sm { padding: 0.25rem 0.6rem; font-size: 0.8rem; }
        .filters { background: #2e3440; padding: 1rem; border-radius: 6px; margin: 1rem 0; }
        .filter-row { display: flex; gap: 0.75rem; align-items: center; flex-wrap: wrap; margin-bottom: 0.5rem; }
        input, select { background: #3b4252; color: #e0e0e0; border: 1px solid #4c566a; border-radius: 4px; padding: 0.4rem; }
        input.error { border-color: #bf616a; }
        .active-filters { display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; }
        .chip { display: inline-flex; gap: 0.25rem; background: #434c5e; padding: 0.2rem 0.5rem; border-radius: 12px; }
        .chip button { background: none; border: none; color: #e0e0e0; cursor: pointer; }
        .jobs-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
        .job-card { background: #2e3440; padding: 1rem; border-radius: 6px; }
        .job-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 0.5rem; }
        .job-actions { display: flex; gap: 0.25rem; align-items: center; }
        .job-actions form { margin: 0; }
        .job-company { font-weight: 600; margin-bottom: 0.5rem; }
        .job-details { display: flex; gap: 0.75rem; flex-wrap: wrap; color: #aaa; font-size: 0.85rem; }
        .tag { background: #3b4252; padding: 0.15rem 0.5rem; border-radius: 3px; font-size: 0.8rem; margin-right: 0.25rem; }
        .job-tags { margin-top: 0.5rem; }
        .error-message { background: #3b1f23; color: #bf616a; padding: 0.75rem; border-radius: 4px; margin: 0.5rem 0; }
        .success-message { background: #1f3b24; color: #a3be8c; padding: 0.75rem; border-radius: 4px; margin: 0.5rem 0; }
        .notice { background: #1f3b24; color: #a3be8c; padding: 0.75rem; border-radius: 4px; margin: 0.5rem 0; }
        .field-error { color: #bf616a; font-size: 0.85rem; }
        .loading, .no-jobs { text-align: center; color: #888; padding: 2rem; }
        .form-group { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 1rem; }
        .form-actions { display: flex; gap: 0.5rem; }
        .delete-confirmation { background: #2e3440; padding: 1.5rem; border-radius: 6px; max-width: 480px; }
        .delete-actions { display: flex; gap: 0.5rem; }
        footer { margin-top: 3rem; color: #666; font-size: 0.8rem; text-align: center; }
    </style>
</head>
<body>
    <header class="app-header">
        <h1>Job Listing Portal</h1>
        <span class="api-status <!-- STATUS_CLASS -->">API: <!-- STATUS_LABEL --></span>
    </header>
    <main>
        <!-- NOTICE -->
        <!-- CONTENT -->
    </main>
    <footer>Actuarial job listings</footer>
    <!-- ALERTS -->
</body>
</html>"#;

const JOBS_SECTION_HTML: &str = r#"<section class="jobs-section">
    <div class="jobs-header">
        <h2>Job Listings (<!-- COUNT -->)</h2>
        <a href="/jobs/new" class="btn">Add New Job</a>
    </div>
    <!-- FILTERS -->
    <!-- BODY -->
</section>"#;

const FILTERS_HTML: &str = r#"<div class="filters">
    <form method="post" action="/filters">
        <div class="filter-row">
            <input type="text" name="search" value="<!-- SEARCH -->" placeholder="Search jobs by title or company...">
            <button type="submit" class="btn">Search</button>
            <label>Sort <select name="sort"><!-- SORT_OPTIONS --></select></label>
            <label>Type <!-- JOB_TYPE_SELECT --></label>
        </div>
        <!-- ADVANCED -->
    </form>
    <form method="post" action="/filters/advanced">
        <button type="submit" class="btn btn-secondary btn-sm"><!-- TOGGLE_LABEL --></button>
    </form>
    <!-- CHIPS -->
</div>"#;

const FORM_HTML: &str = r#"<section class="add-edit-job">
    <div class="jobs-header">
        <h2><!-- HEADING --></h2>
        <a href="/back" class="btn btn-secondary">Back to Jobs</a>
    </div>
    <!-- SUCCESS -->
    <!-- GENERAL_ERROR -->
    <form method="post" action="<!-- ACTION -->" class="job-form">
        <!-- TITLE_FIELD -->
        <!-- COMPANY_FIELD -->
        <!-- LOCATION_FIELD -->
        <div class="form-group">
            <label for="job_type">Job Type *</label>
            <select id="job_type" name="job_type"><!-- JOB_TYPE_OPTIONS --></select>
            <!-- JOB_TYPE_ERROR -->
        </div>
        <!-- TAGS_FIELD -->
        <!-- POSTING_DATE_FIELD -->
        <div class="form-actions">
            <button type="submit" class="btn" <!-- SUBMIT_DISABLED -->><!-- SUBMIT_LABEL --></button>
            <a href="/back" class="btn btn-secondary">Cancel</a>
        </div>
    </form>
</section>"#;

const DELETE_PANEL_HTML: &str = r#"<div class="delete-confirmation">
    <h3>Confirm Delete</h3>
    <p>Are you sure you want to delete this job?</p>
    <div class="job-info">
        <strong><!-- TITLE --></strong><br>
        <span><!-- COMPANY --></span><br>
        <span><!-- LOCATION --></span>
    </div>
    <!-- ERROR -->
    <div class="delete-actions">
        <form method="post" action="/jobs/<!-- ID -->/delete/confirm">
            <button type="submit" class="btn btn-danger" <!-- DISABLED -->><!-- CONFIRM_LABEL --></button>
        </form>
        <form method="post" action="/jobs/<!-- ID -->/delete/cancel">
            <button type="submit" class="btn btn-secondary" <!-- DISABLED -->>Cancel</button>
        </form>
    </div>
</div>"#;

const ERROR_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Job Listing Portal - Error</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; max-width: 800px; margin: 0 auto; padding: 2rem; background: #0a0a0a; color: #e0e0e0; }
        h1 { color: #bf616a; }
        a { color: #81a1c1; }
    </style>
</head>
<body>
    <h1>Something went wrong</h1>
    <p><!-- MESSAGE --></p>
    <p><a href="/">Back to Jobs</a></p>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"R&D"</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_script_string_cannot_close_script() {
        let s = script_string("</script><script>alert(1)");
        assert!(!s.contains("</script>"));
        assert!(s.starts_with('"'));
    }

    #[test]
    fn test_select_keeps_unknown_selection() {
        let html = select(FilterField::Tag, "All Tags", &[], "Pension", false);
        assert!(html.contains(r#"<option value="Pension" selected>"#));
        assert!(html.contains(r#"<option value="">All Tags</option>"#));
    }

    #[test]
    fn test_select_disabled_while_loading() {
        let html = select(
            FilterField::Location,
            "All Locations",
            &["Remote".to_string()],
            "",
            true,
        );
        assert!(html.starts_with(r#"<select name="location" disabled>"#));
    }
}
