//! `jobcrew doctor`: diagnose configuration and credentials.

use jobcrew_config::{AGENTVERSE_API_KEY, AppConfig, OPENAI_API_KEY, SERPER_API_KEY};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 jobcrew Doctor: System Diagnostics");
    println!("======================================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("  ✅ Config file found at {}", config_path.display());
    } else {
        println!("  ℹ️  No config file at {}, defaults apply", config_path.display());
    }

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Config valid (model {}, port {})", config.llm.model, config.registration.port);
            Some(config)
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            issues += 1;
            None
        }
    };

    for name in [AGENTVERSE_API_KEY, OPENAI_API_KEY, SERPER_API_KEY] {
        let present = std::env::var(name).is_ok_and(|v| !v.trim().is_empty());
        if present {
            println!("  ✅ {name} set");
        } else {
            println!("  ❌ {name} not found in environment");
            issues += 1;
        }
    }

    if let (Some(config), Ok(key)) = (&config, std::env::var(OPENAI_API_KEY)) {
        let provider = jobcrew_providers::build_from_config(&config.llm, &key);
        match provider.health_check().await {
            Ok(true) => println!("  ✅ LLM endpoint reachable ({})", config.llm.base_url),
            Ok(false) => {
                println!("  ⚠️  LLM endpoint rejected the key ({})", config.llm.base_url);
                issues += 1;
            }
            Err(e) => {
                println!("  ❌ LLM endpoint unreachable: {e}");
                issues += 1;
            }
        }
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
