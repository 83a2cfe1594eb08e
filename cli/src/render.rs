//! Text rendering for the course page.
//!
//! Deliberately thin: a pure function of the reconciled page state. All
//! decision-making lives in the enrollment crate; this module only chooses
//! which panel to print for each state variant.

use aula_enrollment::CoursePage;
use aula_types::EnrollmentState;
use aula_videos::VideoLibrary;

/// Render the full course page to a string.
pub fn render_page(page: &CoursePage) -> String {
    let mut out = String::new();
    let course = &page.course;

    push_line(&mut out, &format!("{} (#{})", course.title, course.id));
    push_line(&mut out, &format!("instructor: {}", course.instructor_name));
    push_line(&mut out, &format!("price: {}", course.price));
    push_line(&mut out, "");
    push_line(&mut out, &course.description);
    if !course.sections.is_empty() {
        push_line(&mut out, "");
        push_line(&mut out, "sections:");
        for section in &course.sections {
            push_line(&mut out, &format!("  - {}", section.title));
        }
    }
    push_line(&mut out, "");
    push_line(&mut out, &format!("status: {}", status_line(page.state)));
    out
}

/// One-line summary of the enrollment state, with the action it unlocks.
pub fn status_line(state: EnrollmentState) -> &'static str {
    match state {
        EnrollmentState::NotApplied => "not applied — `aula apply` to request enrollment",
        EnrollmentState::Pending => "application pending review",
        EnrollmentState::ApprovedAwaitingPayment => {
            "approved — upload your payment proof with `aula pay`"
        }
        EnrollmentState::ApprovedPaymentPending => "payment proof under review",
        EnrollmentState::Enrolled => "enrolled — lessons available via `aula videos`",
        EnrollmentState::Rejected => "application rejected — you may apply again",
    }
}

/// Render the lesson list with watched markers and busy indicators.
pub fn render_videos(library: &VideoLibrary) -> String {
    let mut out = String::new();
    if library.videos().is_empty() {
        push_line(&mut out, "no lessons published yet");
        return out;
    }
    for video in library.videos() {
        let marker = if video.watched { "[x]" } else { "[ ]" };
        let busy = if library.is_busy(video.id) { " …" } else { "" };
        push_line(
            &mut out,
            &format!("{marker} {}  {}{busy}", video.id, video.title),
        );
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
