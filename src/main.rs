use std::sync::Arc;

use assistant_toolkit::invocation::{InvocationAdapter, InvocationRequest, ToolRegistry};
use assistant_toolkit::tools::register_default_tools;
use assistant_toolkit::{logging, ToolkitConfig};

/// Invoke one tool from the command line:
///
/// ```text
/// assistant-toolkit get_weather city=Paris
/// assistant-toolkit calculate_sum "numbers=1, 2, 3.5"
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = logging::init_logging()?;

    let mut args = std::env::args().skip(1);
    let tool_name = match args.next() {
        Some(name) => name,
        None => {
            eprintln!("usage: assistant-toolkit <tool_name> [key=value ...]");
            std::process::exit(2);
        }
    };

    let config = ToolkitConfig::from_env();

    let mut registry = ToolRegistry::new();
    register_default_tools(&mut registry, &config)?;
    tracing::info!("Registered {} tools", registry.len());

    let adapter = InvocationAdapter::new(Arc::new(registry), &config)?;

    let mut request = InvocationRequest::new(tool_name);
    for pair in args {
        match pair.split_once('=') {
            Some((key, value)) => {
                request = request.with_arg(key, value);
            }
            None => {
                eprintln!("ignoring malformed argument '{}' (expected key=value)", pair);
            }
        }
    }

    let result = adapter.invoke(request).await;
    println!("{}", result.text);

    if !result.succeeded {
        std::process::exit(1);
    }
    Ok(())
}
