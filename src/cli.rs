use clap::{Parser, Subcommand};
use errori_checker_common::{Status, StatusFilter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "errori-checker")]
#[command(about = "Checklist di revisione errori per cataloghi da file Excel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log dettagliato su stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// File JSON dello stato dei check (sovrascrive config e ERRORI_CHECKER_STORE)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Elenca i cataloghi con il loro avanzamento
    List {
        /// File Excel dei cataloghi
        #[arg(required = true)]
        file: PathBuf,

        /// Cerca per ID catalogo (senza distinzione maiuscole/minuscole)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filtro (all/complete/incomplete)
        #[arg(short, long, default_value = "all")]
        filter: StatusFilter,

        /// Pagina da mostrare (da 1)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Mostra gli errori di un catalogo
    Show {
        /// File Excel dei cataloghi
        #[arg(required = true)]
        file: PathBuf,

        /// ID del catalogo
        #[arg(required = true)]
        catalog: String,
    },

    /// Imposta lo stato di un errore
    Set {
        /// File Excel dei cataloghi
        #[arg(required = true)]
        file: PathBuf,

        /// ID del catalogo
        #[arg(required = true)]
        catalog: String,

        /// Numero dell'errore (da 1, come mostrato)
        #[arg(required = true)]
        number: usize,

        /// Stato (pending/done/impossible/reviewing)
        #[arg(required = true)]
        status: Status,
    },

    /// Mostra l'avanzamento complessivo
    Progress {
        /// File Excel dei cataloghi
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Esporta il log dei check in Excel
    Export {
        /// File Excel dei cataloghi
        #[arg(required = true)]
        file: PathBuf,

        /// File di output, oppure cartella esistente o terminata da "/" (default: cartella corrente)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Azzera tutti i check
    Reset {
        /// Salta la conferma
        #[arg(long)]
        yes: bool,
    },

    /// Revisione interattiva dei cataloghi
    Review {
        /// File Excel dei cataloghi
        #[arg(required = true)]
        file: PathBuf,

        /// Ricerca iniziale
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filtro iniziale (all/complete/incomplete)
        #[arg(short, long, default_value = "all")]
        filter: StatusFilter,

        /// Destinazione di "Export", come per il comando export (default: cartella corrente)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Mostra/modifica la configurazione
    Config {
        /// Imposta il file dello stato dei check
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// Imposta il numero di cataloghi per pagina
        #[arg(long)]
        set_page_size: Option<usize>,

        /// Mostra la configurazione
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_command() {
        let cli = Cli::try_parse_from(["errori-checker", "set", "cat.xlsx", "C1", "2", "done"])
            .expect("パース失敗");
        match cli.command {
            Commands::Set {
                catalog,
                number,
                status,
                ..
            } => {
                assert_eq!(catalog, "C1");
                assert_eq!(number, 2);
                assert_eq!(status, Status::Done);
            }
            _ => panic!("Set以外にパースされた"),
        }
    }

    #[test]
    fn test_parse_invalid_status() {
        let result = Cli::try_parse_from(["errori-checker", "set", "cat.xlsx", "C1", "2", "ok"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["errori-checker", "-v", "list", "cat.xlsx"])
            .expect("パース失敗");
        assert!(cli.verbose);
        match cli.command {
            Commands::List {
                search,
                filter,
                page,
                ..
            } => {
                assert!(search.is_empty());
                assert_eq!(filter, StatusFilter::All);
                assert_eq!(page, 1);
            }
            _ => panic!("List以外にパースされた"),
        }
    }

    #[test]
    fn test_parse_review_output() {
        let cli = Cli::try_parse_from(["errori-checker", "review", "dati/cat.xlsx"])
            .expect("パース失敗");
        match cli.command {
            Commands::Review { output, .. } => assert!(output.is_none()),
            _ => panic!("Review以外にパースされた"),
        }

        let cli = Cli::try_parse_from(["errori-checker", "review", "cat.xlsx", "-o", "log/"])
            .expect("パース失敗");
        match cli.command {
            Commands::Review { output, .. } => assert_eq!(output, Some(PathBuf::from("log/"))),
            _ => panic!("Review以外にパースされた"),
        }
    }
}
