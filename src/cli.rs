use env_loadr::{Env, parsers};
use std::collections::HashMap;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    dotenvy::from_filename("./test.env").ok();
    match std::env::args().nth(1) {
        Some(arg) => match arg.as_str() {
            "default" => show_defaults(),
            "env" => show_env(),
            "list" => show_lists(),
            "error" => show_error(),
            "error_result" => show_error_result(),
            _ => println!(
                "unknown arg: {}. Available: default, env, list, error, error_result",
                arg
            ),
        },
        None => {
            println!("Usage: util-cli [command]");
            println!("Commands:");
            println!("  default      - Read unset variables, printing their fallbacks");
            println!("  env          - Read variables loaded from test.env");
            println!("  list         - Read comma-separated lists, lenient and strict");
            println!("  error        - Read a malformed integer (panics)");
            println!("  error_result - Read a malformed integer and print the error");
        }
    };
}

fn show_defaults() {
    // An empty snapshot, so every accessor resolves to its fallback
    let env = Env::new(HashMap::<String, String>::new());
    println!("Fallbacks:");
    println!("  string: {}", env.get_string("UNSET_STRING", "localhost"));
    println!("  int: {}", env.get_int("UNSET_INT", 8080));
    println!("  int64: {}", env.get_int64("UNSET_INT64", 1 << 40));
    println!("  float64: {}", env.get_float64("UNSET_FLOAT64", 0.5));
    println!("  bool: {}", env.get_bool("UNSET_BOOL", true));
    println!(
        "  duration: {:?}",
        env.get_duration("UNSET_DURATION", Duration::from_secs(30))
    );
}

fn show_env() {
    println!("Values from test.env:");
    println!("  string: {}", env_loadr::get_string("ENV_LOADR_STRING", "none"));
    println!("  int: {}", env_loadr::get_int("ENV_LOADR_INT", 0));
    println!("  int64: {}", env_loadr::get_int64("ENV_LOADR_INT64", 0));
    println!("  float64: {}", env_loadr::get_float64("ENV_LOADR_FLOAT64", 0.0));
    println!("  bool_true: {}", env_loadr::get_bool("ENV_LOADR_BOOL_TRUE", false));
    println!("  bool_false: {}", env_loadr::get_bool("ENV_LOADR_BOOL_FALSE", true));
    println!(
        "  duration: {:?}",
        env_loadr::get_duration("ENV_LOADR_DURATION", Duration::ZERO)
    );
}

fn show_lists() {
    let hosts = env_loadr::get_list("ENV_LOADR_HOSTS", parsers::identity, Vec::new());
    println!("hosts: {:?}", hosts);

    let ports = env_loadr::get_list("ENV_LOADR_PORTS", parsers::from_str::<u16>, vec![80]);
    println!("ports: {:?}", ports);

    let bad_ports = env_loadr::get_list("ENV_LOADR_BAD_PORTS", parsers::from_str::<u16>, vec![80]);
    println!("bad ports (fallback): {:?}", bad_ports);

    match env_loadr::try_get_list("ENV_LOADR_BAD_PORTS", parsers::from_str::<u16>, vec![80]) {
        Ok(ports) => println!("bad ports (strict): {:?}", ports),
        Err(e) => eprintln!("bad ports (strict):\n\t- {}", e),
    }
}

fn show_error() {
    let _value = env_loadr::get_int("ENV_LOADR_WRONG_TYPE", 0);
    println!("you should not see this");
}

fn show_error_result() {
    match env_loadr::try_get_int("ENV_LOADR_WRONG_TYPE", 0) {
        Ok(value) => println!("Value loaded successfully: {}", value),
        Err(e) => {
            eprintln!("Failed to load value:");
            eprintln!("\t- {}", e);
        }
    }
    println!("all done");
}
