use crate::di::ConfigUseCases;
use clap::Subcommand;
use goalgate_domain::{BlockConfig, Settings};

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the blocked apps and sites
    Show,
    /// Replace the blocked apps and sites
    Set {
        /// Application name (repeatable)
        #[arg(long = "app")]
        apps: Vec<String>,
        /// Website domain (repeatable)
        #[arg(long = "site")]
        sites: Vec<String>,
    },
    /// Add a single app and/or site
    Add {
        #[arg(long)]
        app: Option<String>,
        #[arg(long)]
        site: Option<String>,
    },
    /// Remove a single app and/or site
    Remove {
        #[arg(long)]
        app: Option<String>,
        #[arg(long)]
        site: Option<String>,
    },
}

pub async fn config(settings: &Settings, command: ConfigCommand) -> anyhow::Result<()> {
    let use_cases = ConfigUseCases::open(settings).await?;

    let config = match command {
        ConfigCommand::Show => use_cases.get.execute().await,
        ConfigCommand::Set { apps, sites } => {
            use_cases.update.execute(apps, sites).await?
        }
        ConfigCommand::Add { app, site } => {
            anyhow::ensure!(app.is_some() || site.is_some(), "nothing to add: pass --app or --site");
            use_cases
                .update
                .modify(move |config| add_entries(config, app, site))
                .await?
        }
        ConfigCommand::Remove { app, site } => {
            anyhow::ensure!(app.is_some() || site.is_some(), "nothing to remove: pass --app or --site");
            use_cases
                .update
                .modify(move |config| remove_entries(config, app, site))
                .await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn add_entries(mut config: BlockConfig, app: Option<String>, site: Option<String>) -> BlockConfig {
    if let Some(app) = app {
        config = config.with_app(app);
    }
    if let Some(site) = site {
        config = config.with_site(site);
    }
    config
}

fn remove_entries(mut config: BlockConfig, app: Option<String>, site: Option<String>) -> BlockConfig {
    if let Some(app) = app {
        config = config.without_app(&app);
    }
    if let Some(site) = site {
        config = config.without_site(&site);
    }
    config
}
