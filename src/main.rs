use clap::Parser;
use errori_checker::{cli, config, error, export, loader, logging, render, review, storage};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use errori_checker_common::{
    aggregate_progress, catalog_progress, filter_catalogs, paginate, Selection, StatusFilter,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let store_path = config.resolve_store_path(cli.store)?;

    match cli.command {
        Commands::List { file, search, filter, page } => {
            let catalogs = loader::load_catalogs(&file)?;
            let store = storage::open_store(&store_path);
            let statuses = store.map();

            let filtered = filter_catalogs(&catalogs, statuses, &search, filter);
            let page = paginate(&filtered, page.saturating_sub(1), config.page_size);

            println!("{}\n", render::render_summary(&aggregate_progress(&catalogs, statuses)));
            for catalog in page.items {
                println!("{}", render::render_catalog_line(catalog, statuses, false));
            }
            if filtered.is_empty() {
                println!("Nessun risultato");
            }
            println!(
                "\nPagina {}/{} · {} cataloghi visibili su {}",
                page.page + 1,
                page.page_count,
                filtered.len(),
                catalogs.len()
            );
        }

        Commands::Show { file, catalog } => {
            let catalogs = loader::load_catalogs(&file)?;
            let store = storage::open_store(&store_path);
            let entry = loader::require_catalog(&catalogs, &catalog)?;
            println!("{}", render::render_catalog_detail(entry, store.map(), catalogs.len()));
        }

        Commands::Set { file, catalog, number, status } => {
            let catalogs = loader::load_catalogs(&file)?;
            let entry = loader::require_catalog(&catalogs, &catalog)?;
            let index = loader::error_index(entry, number)?;

            let mut store = storage::open_store(&store_path);
            store.set(&entry.id, index, status);

            let progress = catalog_progress(entry, store.map());
            println!("✔ {} #{} → {}", entry.id, number, status.label());
            println!("  {} / {} errori controllati", progress.done, progress.total);
        }

        Commands::Progress { file } => {
            let catalogs = loader::load_catalogs(&file)?;
            let store = storage::open_store(&store_path);
            let statuses = store.map();

            let total = aggregate_progress(&catalogs, statuses);
            let complete = filter_catalogs(&catalogs, statuses, "", StatusFilter::Complete);
            println!("{}", render::render_summary(&total));
            println!("  Cataloghi: {} ({} completati)", catalogs.len(), complete.len());
            println!("  Check salvati: {}", store.len());
        }

        Commands::Export { file, output } => {
            let catalogs = loader::load_catalogs(&file)?;
            let store = storage::open_store(&store_path);
            let output_dir = export::output_or_current_dir(output);

            println!("- Generazione Excel...");
            match export::export_log(&catalogs, store.map(), &output_dir, &config.export_file_name)? {
                Some(path) => println!("✔ Esportato: {}", path.display()),
                None => println!("⚠ Nessun catalogo da esportare"),
            }
        }

        Commands::Reset { yes } => {
            let mut store = storage::open_store(&store_path);
            let confirmed = yes || review::confirm_reset()?;
            if store.reset_all(|| confirmed) {
                println!("✔ Tutti i check sono stati azzerati");
            } else {
                println!("Annullato");
            }
        }

        Commands::Review { file, search, filter, output } => {
            let catalogs = loader::load_catalogs(&file)?;
            let mut store = storage::open_store(&store_path);
            let selection = Selection {
                search,
                filter,
                ..Selection::for_catalogs(&catalogs)
            };
            let export_dir = export::output_or_current_dir(output);
            let source_name = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());

            review::run_review(
                &source_name,
                &catalogs,
                &mut store,
                selection,
                &export_dir,
                &config.export_file_name,
            )?;
        }

        Commands::Config { set_store, set_page_size, show } => {
            if let Some(path) = set_store {
                config.set_store_path(path)?;
                println!("✔ File di stato impostato");
            }

            if let Some(size) = set_page_size {
                config.set_page_size(size)?;
                println!("✔ Cataloghi per pagina: {}", size);
            }

            if show {
                println!("Configurazione:");
                println!("  File di stato: {}", config.resolve_store_path(None)?.display());
                println!("  File di export: {}", config.export_file_name);
                println!("  Cataloghi per pagina: {}", config.page_size);
            }
        }
    }

    Ok(())
}
