//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::config::Settings;
use fashionos_core::wizard::first_invalid_step;
use fashionos_core::{
    Catalog, DesignerProfile, DraftSubmission, FashionError, Step, SubmittedRecord,
    WizardController, compute_step_validity, resolve_profile,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE LIMITS
// =============================================================================

/// Maximum size of a draft file (1 MB). Drafts carry image names only.
const MAX_DRAFT_FILE_SIZE: u64 = 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), FashionError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| FashionError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(FashionError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve `path` to an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, FashionError> {
    let canonical = path.canonicalize().map_err(|e| {
        FashionError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(FashionError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

fn print_json(value: &impl Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    config: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    verbose: bool,
) -> Result<(), FashionError> {
    let mut settings = Settings::load(config)?;
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    println!("FashionOS Atelier Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Address:      {}", settings.bind_addr());
    println!("  Submit delay: {} ms", settings.wizard.submit_delay_ms);
    println!(
        "  Sessions:     {}",
        match settings.wizard.max_sessions {
            0 => "unbounded".to_string(),
            n => format!("up to {}", n),
        }
    );
    println!(
        "  Rate limit:   {}",
        match settings.server.rate_limit {
            0 => "disabled".to_string(),
            n => format!("{} req/s", n),
        }
    );
    println!(
        "  API key:      {}",
        if settings.server.api_key.is_some() {
            "required"
        } else {
            "not set"
        }
    );
    println!();
    if verbose {
        println!("Endpoints:");
        println!("  GET  /collections          - Collection gallery");
        println!("  GET  /designers            - Designer directory");
        println!("  GET  /designers/{{id}}       - Designer profile");
        println!("  POST /wizards              - Open a submission wizard");
        println!("  POST /wizards/{{id}}/advance - Next step (gated)");
        println!("  POST /wizards/{{id}}/submit  - Submit from review");
        println!("  GET  /health               - Health check");
        println!();
    }
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(settings).await
}

// =============================================================================
// CATALOG COMMANDS
// =============================================================================

/// Show the brand copy.
pub fn cmd_site(json_mode: bool) -> Result<(), FashionError> {
    let catalog = Catalog::builtin();
    let brand = catalog.brand();

    if json_mode {
        print_json(brand);
        return Ok(());
    }

    println!("{}", brand.name);
    println!("{}", "=".repeat(brand.name.chars().count()));
    println!("{}", brand.hero_tagline);
    println!("{}", brand.subheading);
    println!();
    println!("\"{}\"", brand.footer_quote);
    Ok(())
}

/// List collections, optionally only those by one designer.
pub fn cmd_collections(json_mode: bool, designer: Option<&str>) -> Result<(), FashionError> {
    let catalog = Catalog::builtin();
    let collections: Vec<_> = match designer {
        Some(name) => catalog.collections_by(name).collect(),
        None => catalog.collections().iter().collect(),
    };

    if json_mode {
        print_json(&collections);
        return Ok(());
    }

    if collections.is_empty() {
        println!("No collections found");
        return Ok(());
    }

    println!("Collections ({})", collections.len());
    println!("===========");
    for c in collections {
        println!("  {:<10} {} - {} ({})", c.id, c.title, c.designer, c.season);
    }
    Ok(())
}

/// List catalog designers.
pub fn cmd_designers(json_mode: bool) -> Result<(), FashionError> {
    let catalog = Catalog::builtin();
    let designers = catalog.designers();

    if json_mode {
        print_json(&designers);
        return Ok(());
    }

    println!("Designers ({})", designers.len());
    println!("=========");
    for d in designers {
        let badge = if d.is_new { " [New Arrival]" } else { "" };
        println!("  {:<6} {} - {}, {}{}", d.id, d.name, d.specialty, d.location, badge);
    }
    Ok(())
}

/// Show a catalog designer profile.
pub fn cmd_designer(json_mode: bool, id: Option<&str>) -> Result<(), FashionError> {
    let catalog = Catalog::builtin();
    let Some(profile) = resolve_profile(id, None, &catalog) else {
        if json_mode {
            print_json(&serde_json::json!({ "found": false, "id": id }));
        } else {
            println!("Designer Not Found");
        }
        return Ok(());
    };

    if json_mode {
        print_json(&profile);
        return Ok(());
    }

    print_profile(&profile);
    Ok(())
}

fn print_profile(profile: &DesignerProfile) {
    let badge = if profile.is_new { "  [New Arrival]" } else { "" };
    println!("{}{}", profile.name, badge);
    println!("{} | {}", profile.specialty, profile.location);
    println!();
    println!("{}", profile.bio);
    for (label, value) in [
        ("Email", &profile.email),
        ("Website", &profile.website),
        ("Social", &profile.social),
    ] {
        if let Some(value) = value {
            println!("  {:<8} {}", label, value);
        }
    }
    if !profile.collections.is_empty() {
        println!();
        println!("Collections:");
        for c in &profile.collections {
            println!("  {} ({})", c.title, c.season);
        }
    }
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Result of walking a draft through the wizard.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Validity of steps 1 to 6.
    pub steps: Vec<StepCheck>,
    /// Step the wizard stopped at.
    pub reached: Step,
    /// First step that blocks, if any.
    pub blocked_at: Option<Step>,
    /// Frozen record when the draft can be submitted.
    pub record: Option<SubmittedRecord>,
}

/// Validity of one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepCheck {
    pub step: Step,
    pub label: &'static str,
    pub valid: bool,
}

/// Parse a draft from file contents.
pub fn parse_draft(contents: &str, format: &str) -> Result<DraftSubmission, FashionError> {
    match format {
        "json" => serde_json::from_str(contents)
            .map_err(|e| FashionError::IoError(format!("Invalid JSON draft: {}", e))),
        "toml" => toml::from_str(contents)
            .map_err(|e| FashionError::IoError(format!("Invalid TOML draft: {}", e))),
        other => Err(FashionError::IoError(format!("Unknown format: {}", other))),
    }
}

/// Advance a wizard over `draft` as far as it goes, then try to submit.
#[must_use]
pub fn check_draft(draft: DraftSubmission) -> CheckReport {
    let steps = Step::ALL
        .iter()
        .map(|&step| StepCheck {
            step,
            label: step.label(),
            valid: compute_step_validity(&draft, step),
        })
        .collect();
    let blocked_at = first_invalid_step(&draft);

    let mut wizard = WizardController::from_draft(draft);
    while wizard.advance() && !wizard.current_step().is_review() {}
    let reached = wizard.current_step();
    let record = wizard.submit();

    CheckReport {
        steps,
        reached,
        blocked_at,
        record,
    }
}

/// Check a draft file.
pub fn cmd_check(json_mode: bool, file: &Path, format: &str) -> Result<(), FashionError> {
    tracing::info!("Checking draft {:?} (format: {})", file, format);

    let validated_path = validate_file_path(file)?;
    validate_file_size(&validated_path, MAX_DRAFT_FILE_SIZE)?;
    let contents = std::fs::read_to_string(&validated_path)
        .map_err(|e| FashionError::IoError(format!("Read file: {}", e)))?;

    let report = check_draft(parse_draft(&contents, format)?);

    if json_mode {
        print_json(&report);
        return Ok(());
    }

    println!("Draft Check");
    println!("===========");
    for s in &report.steps {
        println!(
            "  {} {}",
            if s.valid { "[ok]" } else { "[--]" },
            s.step
        );
    }
    println!();
    println!(
        "Reached step {} ({}%)",
        report.reached,
        report.reached.progress_percent()
    );

    match (&report.record, report.blocked_at) {
        (Some(record), _) => {
            println!(
                "Ready to submit: \"{}\" by {}, {} image(s), {}",
                record.collection_name,
                record.designer_name,
                record.image_count(),
                record.price_label()
            );
        }
        (None, Some(step)) => println!("Blocked at step {}", step),
        (None, None) => println!("Not submittable"),
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
