use anyhow::Context;
use blogflow_rs::blogflow::config::ConfigLoader;
use blogflow_rs::blogflow::server;
use blogflow_rs::blogflow::workflow::{UseCase, WorkflowFactory, WorkflowState};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a blog post for a topic
    Generate {
        /// The topic to write about
        #[arg(short, long)]
        topic: String,

        /// Translate the post into this language
        #[arg(short, long)]
        language: Option<String>,

        /// Workflow to run (topic or language)
        #[arg(short, long)]
        use_case: Option<UseCase>,

        /// Path to a YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// The model to use
        #[arg(short, long)]
        model: Option<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start the HTTP API
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print a workflow graph as Mermaid
    Graph {
        /// Workflow to print (topic or language)
        #[arg(short, long, default_value = "language")]
        use_case: UseCase,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Generate {
            topic,
            language,
            use_case,
            config,
            model,
            json,
        } => {
            let config = ConfigLoader::resolve(config.as_deref())
                .context("Failed to load configuration")?
                .with_overrides(None, model);

            let use_case = use_case.unwrap_or(if language.is_some() {
                UseCase::Language
            } else {
                UseCase::Topic
            });
            let mut initial = WorkflowState::new(topic);
            if let Some(language) = language {
                initial = initial.with_language(language.to_lowercase());
            }

            let workflow = WorkflowFactory::from_config(&config.model)
                .context("Failed to create model")?
                .setup(use_case)?;

            log::info!("Running workflow: {}", workflow.name());
            let state = workflow.run(initial).await.context("Workflow failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("{}\n", state.title().unwrap_or_default());
                println!("{}", state.body().unwrap_or_default());
            }
        }
        Commands::Serve { port, config } => {
            let mut config =
                ConfigLoader::resolve(config.as_deref()).context("Failed to load configuration")?;
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(config).await?;
        }
        Commands::Graph { use_case } => {
            println!("{}", use_case.graph_spec()?.to_mermaid());
        }
    }

    Ok(())
}
