//! Aula CLI — student-facing course page client.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

use aula_client::ApiClient;
use aula_enrollment::{
    load_course_page, submit_application, ApplicationForm, CoursePage, PageLoad,
};
use aula_types::{CourseId, FileAttachment, VideoId};
use aula_videos::{toggle_watched, VideoLibrary};

mod config;
mod render;

#[derive(Parser)]
#[command(name = "aula", version, about = "Aula student course client")]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "AULA_API_URL")]
    api_url: Option<String>,

    /// Bearer token for the signed-in student.
    #[arg(long, env = "AULA_TOKEN")]
    token: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are the
    /// base; flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show the course page with its reconciled enrollment state.
    Course {
        /// Course id.
        id: u64,
    },
    /// Submit an enrollment application.
    Apply {
        /// Course id.
        id: u64,

        #[arg(long)]
        full_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        school: String,

        #[arg(long)]
        motivation: String,

        /// Supporting document to attach.
        #[arg(long, value_name = "FILE")]
        document: PathBuf,
    },
    /// Upload a payment-proof document for an approved application.
    Pay {
        /// Course id.
        id: u64,

        /// Proof document to attach.
        #[arg(long, value_name = "FILE")]
        document: PathBuf,
    },
    /// List the video lessons of an enrolled course.
    Videos {
        /// Course id.
        id: u64,
    },
    /// Flip a video's watched flag.
    Watch {
        /// Course id the video belongs to.
        #[arg(long)]
        course: u64,

        /// Video id.
        video_id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    aula_utils::init_tracing();

    let cli = Cli::parse();
    let config = config::resolve(cli.config.as_deref(), cli.api_url, cli.token);
    let client = ApiClient::with_timeout(
        &config.base_url,
        config.token.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;

    match cli.command {
        Command::Course { id } => cmd_course(&client, CourseId::new(id)).await,
        Command::Apply {
            id,
            full_name,
            email,
            phone,
            school,
            motivation,
            document,
        } => {
            let form = ApplicationForm {
                full_name,
                email,
                phone,
                school,
                motivation,
                document: Some(load_attachment(&document)?),
            };
            cmd_apply(&client, CourseId::new(id), form).await
        }
        Command::Pay { id, document } => {
            let attachment = load_attachment(&document)?;
            cmd_pay(&client, CourseId::new(id), attachment).await
        }
        Command::Videos { id } => cmd_videos(&client, CourseId::new(id)).await,
        Command::Watch { course, video_id } => {
            cmd_watch(&client, CourseId::new(course), VideoId::new(video_id)).await
        }
    }
}

/// Load and unwrap the page, routing authorization failures to the login hint.
async fn ready_page(client: &ApiClient, course_id: CourseId) -> Result<CoursePage> {
    match load_course_page(client, course_id).await? {
        PageLoad::Ready(page) => Ok(page),
        PageLoad::LoginRequired => {
            bail!("session expired — sign in again and update AULA_TOKEN")
        }
    }
}

async fn cmd_course(client: &ApiClient, course_id: CourseId) -> Result<()> {
    let page = ready_page(client, course_id).await?;
    print!("{}", render::render_page(&page));
    Ok(())
}

async fn cmd_apply(client: &ApiClient, course_id: CourseId, form: ApplicationForm) -> Result<()> {
    let page = ready_page(client, course_id).await?;
    if !page.state.can_apply() {
        bail!(
            "cannot apply right now: {}",
            render::status_line(page.state)
        );
    }
    let state = submit_application(client, course_id, &form, page.state).await?;
    println!("application submitted");
    println!("status: {}", render::status_line(state));
    Ok(())
}

async fn cmd_pay(
    client: &ApiClient,
    course_id: CourseId,
    attachment: FileAttachment,
) -> Result<()> {
    let page = ready_page(client, course_id).await?;
    if !page.state.can_submit_payment() {
        bail!(
            "cannot upload a payment proof right now: {}",
            render::status_line(page.state)
        );
    }
    let state =
        aula_enrollment::payment::submit_payment_proof(client, course_id, &attachment, page.state)
            .await?;
    println!("payment proof uploaded");
    println!("status: {}", render::status_line(state));
    Ok(())
}

async fn cmd_videos(client: &ApiClient, course_id: CourseId) -> Result<()> {
    let page = ready_page(client, course_id).await?;
    if !page.state.can_watch_videos() {
        bail!(
            "lessons are only available once enrolled: {}",
            render::status_line(page.state)
        );
    }
    let videos = client.course_videos(course_id).await?;
    let library = VideoLibrary::new(videos);
    print!("{}", render::render_videos(&library));
    Ok(())
}

async fn cmd_watch(client: &ApiClient, course_id: CourseId, video_id: VideoId) -> Result<()> {
    let videos = client.course_videos(course_id).await?;
    let mut library = VideoLibrary::new(videos);
    match toggle_watched(client, &mut library, video_id).await? {
        Some(watched) => {
            let label = if watched { "watched" } else { "unwatched" };
            println!("video {video_id} marked {label}");
        }
        None => bail!("video {video_id} not found in course {course_id}"),
    }
    Ok(())
}

/// Read a document from disk and stage it for upload.
fn load_attachment(path: &Path) -> Result<FileAttachment> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    Ok(FileAttachment::new(file_name, content_type_for(path), bytes))
}

/// Best-effort content type from the file extension.
fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
