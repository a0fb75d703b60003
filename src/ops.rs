use std::{fs, io, path::{Path, PathBuf}};
use tracing::{info, info_span, warn};
use zeroize::Zeroizing;

use crate::codec;
use crate::console::*;
use crate::error::{Error, Result};
use crate::keys::KeySource;
use crate::types::*;
use crate::utils::*;

/// Everything a pipeline run needs once the interactive questions are answered.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub profile: CurrencyProfile,
    pub count: usize,
    pub name: String,
    pub dir: PathBuf,
    /// Overwrite existing files without asking.
    pub force: bool,
}

/// Values supplied on the command line. Anything missing is asked for interactively.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub currency: Option<CurrencyProfile>,
    pub count: Option<usize>,
    pub name: Option<String>,
    pub dir: PathBuf,
    pub assume_yes: bool,
    pub force: bool,
}

/// generate -> encode -> persist -> read back -> verify -> project -> persist
pub struct Pipeline<'a, P: Prompt, S: KeySource> {
    prompt: &'a mut P,
    source: &'a mut S,
}

impl<'a, P: Prompt, S: KeySource> Pipeline<'a, P, S> {
    pub fn new(prompt: &'a mut P, source: &'a mut S) -> Self {
        Self { prompt, source }
    }

    pub fn run(&mut self, request: &GenerateRequest) -> Result<RunOutcome> {
        let _span = info_span!("pipeline", currency = %request.profile, count = request.count).entered();

        self.prompt.say("Creating file content...")?;
        let keys = self.source.generate(request.count);
        self.prompt.say(&format!("... generated {} addresses.", keys.len()))?;
        let document = codec::encode(&keys, request.profile);
        drop(keys);
        let content = Zeroizing::new(codec::render(&document)?);
        info!(rows = document.len(), "full document encoded");

        let full = full_file_path(&request.dir, &request.name);
        if !self.persist(&full, &content, request.force)? {
            return Ok(RunOutcome::Aborted);
        }
        drop(content);

        self.prompt.say("Reading file for verification...")?;
        let persisted = Zeroizing::new(fs::read_to_string(&full)?);
        self.prompt.say("... file read.")?;
        self.prompt.say(&format!("Verifying {} addresses...", codec::count_rows(&persisted)))?;
        let failed_at = match codec::verify(&persisted, &request.profile.network_params()) {
            // rows lost between write and read-back count as a failure at the first missing row
            Ok(report) if report.rows != document.len() => Some(report.rows),
            Ok(_) => None,
            Err(Error::VerificationMismatch { index }) => Some(index),
            Err(e) => return Err(e),
        };
        if let Some(index) = failed_at {
            let moved_to = failed_file_path(&full);
            // rename replaces silently on Unix, and the old artifact still holds keys
            if moved_to.exists() {
                let msg = format!("{} already exists, {} left in place", moved_to.display(), full.display());
                return Err(io::Error::new(io::ErrorKind::AlreadyExists, msg).into());
            }
            fs::rename(&full, &moved_to)?;
            warn!(index, path = %moved_to.display(), "verification failed, full file set aside");
            self.prompt.say(&format!("Verification of address number {} failed!", index))?;
            self.prompt.say(&format!("File moved to {}", moved_to.display()))?;
            return Ok(RunOutcome::VerificationFailed { index, moved_to });
        }
        self.prompt.say("... addresses verified.")?;
        info!(path = %full.display(), "full document verified");

        let public_content = codec::render(&codec::project(&document))?;
        let public = public_file_path(&request.dir, &request.name);
        if !self.persist(&public, &public_content, request.force)? {
            return Ok(RunOutcome::Aborted);
        }
        Ok(RunOutcome::Completed { full, public })
    }

    /// Returns `false` when the user declines to overwrite an existing file.
    fn persist(&mut self, path: &Path, content: &str, force: bool) -> Result<bool> {
        self.prompt.say(&format!("Saving file {}...", path.display()))?;
        if path.exists() && !force {
            if !confirm_overwrite(&mut *self.prompt, path)? {
                self.prompt.say("Aborted.")?;
                info!(path = %path.display(), "overwrite declined");
                return Ok(false);
            }
            self.prompt.say("Overwriting file...")?;
        }
        write_private_file(path, content)?;
        self.prompt.say("... saved.")?;
        info!(path = %path.display(), bytes = content.len(), "file saved");
        Ok(true)
    }
}

/// The interactive flow: disclaimer, currency menu, count, file name, then the pipeline.
pub fn generate_files<P: Prompt, S: KeySource>(prompt: &mut P, source: &mut S, options: GenerateOptions) -> Result<RunOutcome> {
    if !options.assume_yes && !show_disclaimer(prompt)? {
        prompt.say("Aborted.")?;
        return Ok(RunOutcome::Aborted);
    }
    let profile = match options.currency {
        Some(profile) => profile,
        None => select_currency(prompt)?,
    };
    let count = match options.count {
        Some(count) => count,
        None => ask_key_count(prompt)?,
    };
    let name = match options.name {
        Some(name) => name,
        None => ask_file_name(prompt)?,
    };
    let request = GenerateRequest { profile, count, name, dir: options.dir, force: options.force };
    let outcome = Pipeline::new(&mut *prompt, source).run(&request)?;
    if let RunOutcome::Completed { full, .. } = &outcome {
        show_encryption_hint(prompt, full)?;
    }
    Ok(outcome)
}

/// Verifies a full key file that is already on disk.
pub fn verify_file(path: &Path, profile: CurrencyProfile) -> Result<VerifyReport> {
    let _span = info_span!("verify", currency = %profile, path = %path.display()).entered();
    let text = Zeroizing::new(fs::read_to_string(path)?);
    let report = codec::verify(&text, &profile.network_params())?;
    info!(rows = report.rows, "file verified");
    Ok(report)
}
