//! Build command implementation
//!
//! Gathers statistics and page metadata, renders the markdown dataset
//! page and writes it out. This is the original purpose of the tool:
//! one invocation per tensor, producing the page the FROSTT site
//! serves for it.

use std::fs;
use std::path::{Path, PathBuf};

use frostt::{collect_stats, StatOverrides};

use crate::commands::validate_path;
use crate::document::{indent_block, HostedFile, TensorDocument};
use crate::error::Result;
use crate::output;

/// Everything `tns build` accepts.
pub(crate) struct BuildOptions {
    pub tensor: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub cite: Option<PathBuf>,
    pub desc: Option<PathBuf>,
    pub nnz: Option<u64>,
    pub dims: Option<Vec<u64>>,
    pub files: Option<PathBuf>,
    pub base_url: String,
    pub tags: Vec<String>,
    pub quiet: bool,
    pub verbose: bool,
}

/// Run the build command
pub(crate) fn run(opts: BuildOptions) -> Result<()> {
    let overrides = StatOverrides {
        order: opts.dims.as_ref().map(Vec::len),
        nonzeros: opts.nnz,
        dims: opts.dims,
    };

    if !overrides.is_complete() {
        if let Some(tensor) = opts.tensor.as_deref() {
            validate_path(tensor)?;
        }
    }
    let stats = collect_stats(opts.tensor.as_deref(), overrides)?;

    let description = read_block(opts.desc.as_deref())?;
    let citation = read_block(opts.cite.as_deref())?;
    let files = match opts.files.as_deref() {
        Some(path) => load_hosted_files(path, &opts.base_url)?,
        None => Vec::new(),
    };

    let out_path = opts
        .output
        .unwrap_or_else(|| default_output(opts.tensor.as_deref()));
    let title = opts.title.unwrap_or_else(|| title_from(&out_path));

    let doc = TensorDocument {
        title,
        description,
        citation,
        stats,
        files,
        tags: opts.tags,
    };
    let page = doc.render();
    fs::write(&out_path, &page)?;

    if opts.verbose {
        print!("{page}");
    }
    if !opts.quiet {
        output::success(&format!("Wrote {}", out_path.display()));
        output::kv("Order", doc.stats.order);
        output::kv("Non-zeros", output::format_count(doc.stats.nonzeros));
        output::kv("Density", output::format_density(doc.stats.density));
    }

    Ok(())
}

/// Read a free-text file and indent it for a front-matter block.
/// Absent path means an empty block.
fn read_block(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            validate_path(path)?;
            Ok(indent_block(&fs::read_to_string(path)?))
        }
        None => Ok(String::new()),
    }
}

/// Parse the hosted-file list: one `name caption..` per line, name
/// resolved against the hosting URL prefix. Blank lines are ignored.
fn load_hosted_files(path: &Path, base_url: &str) -> Result<Vec<HostedFile>> {
    validate_path(path)?;
    let mut files = Vec::new();
    for line in fs::read_to_string(path)?.lines() {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        files.push(HostedFile {
            url: format!("{base_url}/{name}"),
            caption: tokens.collect::<Vec<_>>().join(" "),
        });
    }
    Ok(files)
}

/// Default output path: the tensor filename with a trailing `.gz`
/// stripped and `.tns` replaced by `.md`, next to the tensor;
/// `output.md` when that does not apply.
fn default_output(tensor: Option<&Path>) -> PathBuf {
    if let Some(tensor) = tensor {
        let name = tensor.file_name().map(|n| n.to_string_lossy());
        if let Some(name) = name {
            let name = name.strip_suffix(".gz").unwrap_or(&name);
            if let Some(stem) = name.strip_suffix(".tns") {
                return tensor.with_file_name(format!("{stem}.md"));
            }
        }
    }
    PathBuf::from("output.md")
}

/// Default title: the output filename without its `.md` extension.
fn title_from(out_path: &Path) -> String {
    out_path
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned())
}
