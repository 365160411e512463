//! Command parsing and execution
//!
//! Usage:
//!   lyricbook import <file> [--dry-run]        Merge a CSV/TSV file into the catalog
//!   lyricbook export <out> [--fields <ids>]    Write the catalog as one table
//!   lyricbook template <out> [--fields <ids>]  Write a header-only file to fill in
//!   lyricbook list                             Show albums and songs
//!
//! Options:
//!   --catalog <path>   Catalog JSON to use instead of the configured one
//!   --json             Output in JSON format

use std::path::{Path, PathBuf};

use anyhow::Context;
use lyricbook_core::{
    export, parse_field_list, template, Catalog, Config, ExportFormat, FieldId, Importer,
};

use crate::store::{load_catalog, save_catalog};

/// CLI command to execute
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Import {
        path: PathBuf,
        dry_run: bool,
    },
    Export {
        out: PathBuf,
        fields: Option<Vec<FieldId>>,
        format: Option<ExportFormat>,
        no_bom: bool,
    },
    Template {
        out: PathBuf,
        fields: Option<Vec<FieldId>>,
        format: Option<ExportFormat>,
        no_bom: bool,
    },
    List,
}

/// CLI options
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub json: bool,
    pub catalog: Option<PathBuf>,
}

/// Command name seen so far, waiting for its positional path
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verb {
    Import,
    Export,
    Template,
    List,
}

impl Verb {
    fn name(self) -> &'static str {
        match self {
            Verb::Import => "import",
            Verb::Export => "export",
            Verb::Template => "template",
            Verb::List => "list",
        }
    }
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut verb: Option<Verb> = None;
    let mut path: Option<PathBuf> = None;
    let mut dry_run = false;
    let mut no_bom = false;
    let mut fields: Option<Vec<FieldId>> = None;
    let mut format: Option<ExportFormat> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--json" => options.json = true,
            "--dry-run" => dry_run = true,
            "--no-bom" => no_bom = true,
            "--catalog" => {
                options.catalog = Some(PathBuf::from(flag_value(args, &mut i, "--catalog")?));
            }
            "--fields" => {
                let value = flag_value(args, &mut i, "--fields")?;
                let parsed = parse_field_list(value)?;
                if parsed.is_empty() {
                    return Err("--fields requires at least one field id".to_string());
                }
                fields = Some(parsed);
            }
            "--format" => {
                format = Some(flag_value(args, &mut i, "--format")?.parse()?);
            }
            _ if arg.starts_with('-') => return Err(format!("Unknown option: {}", arg)),
            _ => match verb {
                None => verb = Some(parse_verb(arg)?),
                Some(Verb::List) => return Err(format!("Unexpected argument: {}", arg)),
                Some(_) if path.is_none() => path = Some(PathBuf::from(arg)),
                Some(_) => return Err(format!("Unexpected argument: {}", arg)),
            },
        }
        i += 1;
    }

    let verb = verb.ok_or_else(|| {
        "No command specified. Use: import <file>, export <out>, template <out>, or list".to_string()
    })?;

    reject_unused_flag(dry_run && verb != Verb::Import, "--dry-run", verb)?;
    let writes_table = matches!(verb, Verb::Export | Verb::Template);
    reject_unused_flag(no_bom && !writes_table, "--no-bom", verb)?;
    reject_unused_flag(fields.is_some() && !writes_table, "--fields", verb)?;
    reject_unused_flag(format.is_some() && !writes_table, "--format", verb)?;

    let command = match verb {
        Verb::List => CliCommand::List,
        Verb::Import => CliCommand::Import {
            path: path.ok_or("import requires a file")?,
            dry_run,
        },
        Verb::Export => CliCommand::Export {
            out: path.ok_or("export requires an output file")?,
            fields,
            format,
            no_bom,
        },
        Verb::Template => CliCommand::Template {
            out: path.ok_or("template requires an output file")?,
            fields,
            format,
            no_bom,
        },
    };

    Ok((command, options))
}

fn parse_verb(s: &str) -> Result<Verb, String> {
    match s {
        "import" => Ok(Verb::Import),
        "export" => Ok(Verb::Export),
        "template" => Ok(Verb::Template),
        "list" | "ls" => Ok(Verb::List),
        _ => Err(format!("Unknown command: {}", s)),
    }
}

fn reject_unused_flag(unused: bool, flag: &str, verb: Verb) -> Result<(), String> {
    if unused {
        return Err(format!("{} does not apply to {}", flag, verb.name()));
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

/// Format requested on the command line, else implied by the file extension, else configured
fn resolve_format(requested: Option<ExportFormat>, out: &Path, config: &Config) -> ExportFormat {
    requested.unwrap_or_else(|| {
        match out.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase) {
            Some(ext) if ext == "tsv" || ext == "tab" => ExportFormat::Tsv,
            Some(ext) if ext == "csv" => ExportFormat::Csv,
            _ => config.export_format,
        }
    })
}

/// Run CLI command
pub fn run(command: CliCommand, options: CliOptions) -> anyhow::Result<()> {
    let config = Config::load();
    let catalog_path = options
        .catalog
        .clone()
        .or_else(|| config.resolved_catalog_path())
        .ok_or_else(|| anyhow::anyhow!("No catalog location. Pass --catalog <path>"))?;

    match command {
        CliCommand::Import { path, dry_run } => {
            run_import(&path, dry_run, &catalog_path, &options)
        }
        CliCommand::Export {
            out,
            fields,
            format,
            no_bom,
        } => {
            let catalog = load_catalog(&catalog_path)?;
            let fields = fields.unwrap_or_else(|| config.default_fields.clone());
            let format = resolve_format(format, &out, &config);
            let bytes = export(&catalog, &fields, format, config.export_bom && !no_bom)?;
            std::fs::write(&out, bytes)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!(
                "Exported {} songs from {} albums to {}",
                catalog.song_count(),
                catalog.len(),
                out.display()
            );
            Ok(())
        }
        CliCommand::Template {
            out,
            fields,
            format,
            no_bom,
        } => {
            let fields = fields.unwrap_or_else(|| config.default_fields.clone());
            let format = resolve_format(format, &out, &config);
            let bytes = template(&fields, format, config.export_bom && !no_bom)?;
            std::fs::write(&out, bytes)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!("Wrote {} template to {}", format, out.display());
            Ok(())
        }
        CliCommand::List => {
            let catalog = load_catalog(&catalog_path)?;
            print_catalog(&catalog, &options);
            Ok(())
        }
    }
}

fn run_import(
    path: &Path,
    dry_run: bool,
    catalog_path: &Path,
    options: &CliOptions,
) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let importer = Importer::new();
    let mut catalog = load_catalog(catalog_path)?;

    if dry_run {
        let preview = importer.preview(&catalog, &bytes, &filename)?;
        if options.json {
            println!("{}", serde_json::to_string_pretty(&preview)?);
        } else {
            println!("Dry run, nothing saved:");
            print!("{}", preview);
        }
        return Ok(());
    }

    let report = importer.import(&mut catalog, &bytes, &filename)?;
    save_catalog(catalog_path, &catalog)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Import Complete:");
        println!("  Lyric lines:   {}", report.lines_imported);
        println!("  Vocabulary:    {}", report.vocab_imported);
        println!("  Grammar:       {}", report.grammar_imported);
        println!("  Rows skipped:  {}", report.rows_skipped);
        println!("  New albums:    {}", report.albums_created);
        println!("  New songs:     {}", report.songs_created);
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog, options: &CliOptions) {
    if options.json {
        let albums: Vec<_> = catalog
            .albums
            .iter()
            .map(|album| {
                serde_json::json!({
                    "title": album.title,
                    "release_date": album.release_date,
                    "songs": album.songs.iter().map(|song| {
                        serde_json::json!({
                            "title": song.title,
                            "release_date": song.release_date,
                            "lyric_lines": song.lyrics.len(),
                            "vocab": song.vocab.len(),
                            "grammar": song.grammar.len(),
                        })
                    }).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::json!({ "albums": albums }));
        return;
    }

    if catalog.is_empty() {
        println!("Catalog is empty");
        return;
    }

    for album in &catalog.albums {
        println!("{} ({})", album.title, album.release_date);
        for song in &album.songs {
            println!(
                "  {} - {} lines, {} vocab, {} grammar",
                song.title,
                song.lyrics.len(),
                song.vocab.len(),
                song.grammar.len()
            );
        }
    }
}

/// Print CLI help
pub fn print_help() {
    println!("lyricbook v{}", env!("CARGO_PKG_VERSION"));
    println!("Import and export a lyric study catalog as CSV/TSV");
    println!();
    println!("USAGE:");
    println!("    lyricbook <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    import <file>               Merge a table into the catalog");
    println!("    export <out>                Write the catalog as one table");
    println!("    template <out>              Write a header-only table to fill in");
    println!("    list                        Show albums and songs");
    println!();
    println!("OPTIONS:");
    println!("    --catalog <path>            Catalog JSON file to use");
    println!("    --dry-run                   Show what an import would change");
    println!("    --fields <ids>              Comma-separated field ids to export");
    println!("    --format <csv|tsv>          Export format (default from extension)");
    println!("    --no-bom                    Omit the UTF-8 byte-order mark");
    println!("    --json                      Output in JSON format");
    println!();
    println!("FIELDS:");
    let ids: Vec<&str> = FieldId::ALL.iter().map(|f| f.as_str()).collect();
    println!("    {}", ids.join(", "));
    println!();
    println!("ENVIRONMENT:");
    println!("    LYRICBOOK_LOG               Log filter, e.g. debug (default warn)");
    println!();
    println!("EXAMPLES:");
    println!("    lyricbook import lyrics.csv --dry-run");
    println!("    lyricbook export vocab.tsv --fields albumTitle,songTitle,vocabWord,vocabTranslation");
    println!("    lyricbook template blank.csv --no-bom");
    println!("    lyricbook list --json");
}
