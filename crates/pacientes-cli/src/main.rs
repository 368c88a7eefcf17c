//! Pacientes CLI - command line client for the patient-records backend.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pacientes_client::{ApiClient, PacienteService, StderrNotificador};
use pacientes_core::{Cedula, Paciente};

/// Pacientes CLI - patient records management tool
#[derive(Parser)]
#[command(name = "pacientes")]
#[command(about = "CLI for the pacientes backend", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(
        short,
        long,
        env = "PACIENTES_API",
        default_value = "http://localhost:3000/api"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,

    /// Fetch a patient by cedula
    Get {
        /// Patient cedula
        cedula: String,
    },

    /// Create a new patient
    Create {
        /// Patient record as inline JSON (must include "cedula")
        #[arg(short, long)]
        paciente: String,
    },

    /// Update an existing patient
    Update {
        /// Patient cedula
        cedula: String,

        /// Updated record as inline JSON
        #[arg(short, long)]
        paciente: String,
    },

    /// Soft-delete a patient (flips status, keeps the record)
    Delete {
        /// Patient cedula
        cedula: String,
    },

    /// Mark a patient active
    Activate {
        /// Patient cedula
        cedula: String,
    },

    /// Mark a patient inactive
    Deactivate {
        /// Patient cedula
        cedula: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let client = ApiClient::new(&cli.base_url, Arc::new(StderrNotificador))?;
    let service = PacienteService::new(client);

    match cli.command {
        Commands::List => {
            let pacientes = service.list().await?;
            print_json(&serde_json::to_value(&pacientes)?);
        }
        Commands::Get { cedula } => {
            let cedula = Cedula::new(cedula)?;
            let paciente = service.get_by_cedula(&cedula).await?;
            print_json(&serde_json::to_value(&paciente)?);
        }
        Commands::Create { paciente } => {
            let paciente: Paciente = serde_json::from_str(&paciente)?;
            let created = service.create(&paciente).await?;
            print_json(&serde_json::to_value(&created)?);
        }
        Commands::Update { cedula, paciente } => {
            let cedula = Cedula::new(cedula)?;
            let paciente: Paciente = serde_json::from_str(&paciente)?;
            let updated = service.update(&cedula, &paciente).await?;
            print_json(&serde_json::to_value(&updated)?);
        }
        Commands::Delete { cedula } => {
            let cedula = Cedula::new(cedula)?;
            let confirmation = service.delete(&cedula).await?;
            print_json(&confirmation);
        }
        Commands::Activate { cedula } => {
            let cedula = Cedula::new(cedula)?;
            let confirmation = service.activate(&cedula).await?;
            print_json(&confirmation);
        }
        Commands::Deactivate { cedula } => {
            let cedula = Cedula::new(cedula)?;
            let confirmation = service.deactivate(&cedula).await?;
            print_json(&confirmation);
        }
    }

    Ok(())
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{value}"),
    }
}
