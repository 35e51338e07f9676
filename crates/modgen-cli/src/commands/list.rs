//! Implementation of the `modgen list` command.

use modgen_core::domain::PageRecord;
use modgen_core::error::ModgenError;

use crate::{
    cli::{ListArgs, ListFormat},
    commands::module_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = module_service(config)?;

    if args.pages {
        let pages = service.list_pages()?;
        return print_pages(&pages, args.format, output);
    }

    let modules: Vec<String> = service
        .list_modules()?
        .into_iter()
        .map(|m| m.to_string())
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Modules:")?;
            if modules.is_empty() {
                output.print("  (none)")?;
            }
            for module in &modules {
                output.bullet(module)?;
            }
        }
        ListFormat::List => {
            for module in &modules {
                println!("{module}");
            }
        }
        ListFormat::Json => println!("{}", to_json(&modules)?),
    }
    Ok(())
}

fn print_pages(pages: &[PageRecord], format: ListFormat, output: &OutputManager) -> CliResult<()> {
    match format {
        ListFormat::Table => {
            output.header("Pages:")?;
            if pages.is_empty() {
                output.print("  (none)")?;
            }
            for page in pages {
                output.bullet(&page_row(page))?;
            }
        }
        ListFormat::List => {
            for page in pages {
                println!("{}", page.path);
            }
        }
        // Bypasses OutputManager so JSON stays parseable in pipes.
        ListFormat::Json => println!("{}", to_json(pages)?),
    }
    Ok(())
}

fn page_row(page: &PageRecord) -> String {
    let mut flags = Vec::new();
    if page.auth {
        flags.push("auth");
    }
    if page.has_page_server {
        flags.push("page-server");
    }
    if page.has_server {
        flags.push("server");
    }

    let mut row = format!("{}/{}  {}", page.module, page.page, page.path);
    if !flags.is_empty() {
        row.push_str(&format!("  [{}]", flags.join(", ")));
    }
    if !page.description.is_empty() {
        row.push_str(&format!("  {}", page.description));
    }
    row
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        CliError::Core(ModgenError::Internal {
            message: format!("failed to serialise listing: {e}"),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(auth: bool, description: &str) -> PageRecord {
        PageRecord {
            module: "widgets".into(),
            page: "list".into(),
            path: "src/routes/widgets/list".into(),
            description: description.into(),
            auth,
            has_page_server: true,
            has_server: false,
        }
    }

    #[test]
    fn row_shows_flags_and_description() {
        assert_eq!(
            page_row(&record(true, "All widgets")),
            "widgets/list  src/routes/widgets/list  [auth, page-server]  All widgets"
        );
    }

    #[test]
    fn row_without_description() {
        assert_eq!(
            page_row(&record(false, "")),
            "widgets/list  src/routes/widgets/list  [page-server]"
        );
    }
}
