use checkout_bridge::application::adapter::SessionAdapter;
use checkout_bridge::application::bridge::InvocationBridge;
use checkout_bridge::domain::ports::{CheckoutGateway, ResponseSink};
use checkout_bridge::infrastructure::channel::ChannelSink;
use checkout_bridge::infrastructure::scripted::{ScriptedCheckout, ScriptedOutcome};
use checkout_bridge::interfaces::json::invocation_reader::InvocationReader;
use checkout_bridge::interfaces::json::response_writer::ResponseWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input invocations file (JSON lines)
    input: PathBuf,

    /// Scripted checkout outcomes (JSON lines, optional). Sessions succeed
    /// once the script is exhausted.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn load_script(path: PathBuf) -> Result<Vec<ScriptedOutcome>> {
    let file = File::open(path).into_diagnostic()?;
    serde_json::Deserializer::from_reader(file)
        .into_iter::<ScriptedOutcome>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .into_diagnostic()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let script = match cli.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };

    let gateway: Arc<dyn CheckoutGateway> = Arc::new(ScriptedCheckout::new(script));
    let adapter = SessionAdapter::new(gateway);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink: Arc<dyn ResponseSink> = Arc::new(ChannelSink::new(tx));
    let bridge = InvocationBridge::new(adapter, sink);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = InvocationReader::new(file);

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());

    for invocation_result in reader.invocations() {
        match invocation_result {
            Ok(invocation) => {
                bridge
                    .handle_start_payment(invocation.invocation_id, invocation.parameters)
                    .await;

                // Every invocation resolves to exactly one response.
                let Some((invocation_id, response)) = rx.recv().await else {
                    break;
                };
                writer
                    .write_response(&invocation_id, &response)
                    .into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading invocation: {}", e);
            }
        }
    }

    Ok(())
}
