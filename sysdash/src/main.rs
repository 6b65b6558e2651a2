//! Entry point for the sysdash TUI. Parses args and runs the App.

use std::env;

use sysdash::app::App;
use url::Url;

const DEFAULT_URL: &str = "ws://localhost:3002/ws";

fn usage(prog: &str) -> String {
    format!("Usage: {prog} [ws://HOST:PORT/ws]  (default {DEFAULT_URL})")
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<String, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "sysdash".into());
    let mut url: Option<String> = None;

    for arg in it {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage(&prog)),
            _ => {
                if url.is_none() {
                    url = Some(arg);
                } else {
                    return Err(format!("Unexpected argument. {}", usage(&prog)));
                }
            }
        }
    }

    let raw = url.unwrap_or_else(|| DEFAULT_URL.to_string());
    let parsed = Url::parse(&raw).map_err(|e| format!("Invalid URL '{raw}': {e}"))?;
    match parsed.scheme() {
        "ws" | "wss" => Ok(raw),
        other => Err(format!("Unsupported scheme '{other}', expected ws:// or wss://")),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    let mut app = App::new(&url);
    if let Err(e) = app.run(&url).await {
        eprintln!("sysdash: {e}");
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_url_when_none_given() {
        assert_eq!(parse_args(args(&["sysdash"])).unwrap(), DEFAULT_URL);
    }

    #[test]
    fn accepts_ws_and_wss() {
        assert!(parse_args(args(&["sysdash", "ws://h:1/ws"])).is_ok());
        assert!(parse_args(args(&["sysdash", "wss://h/ws"])).is_ok());
    }

    #[test]
    fn rejects_http_and_garbage() {
        assert!(parse_args(args(&["sysdash", "http://h/ws"])).is_err());
        assert!(parse_args(args(&["sysdash", "not a url"])).is_err());
        assert!(parse_args(args(&["sysdash", "ws://a/ws", "ws://b/ws"])).is_err());
    }

    #[test]
    fn help_wins() {
        let err = parse_args(args(&["sysdash", "--help"])).unwrap_err();
        assert!(err.starts_with("Usage:"));
    }
}
