//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;
use rlc_common::{FileInfo, HostInfo, InstanceInfo};

use crate::domain::address::{AppPath, InstancePath};
use crate::domain::config::RlcConfig;
use crate::output::OutputContext;

/// Renders launcher data as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("rlc {version}");
    }

    /// Render the host listing, one line per host or a detailed tree.
    pub fn render_hosts(&self, hosts: &[HostInfo], long: bool) {
        if hosts.is_empty() {
            if !self.ctx.quiet {
                println!("No launcher hosts matched.");
            }
            return;
        }
        if !long {
            for host in hosts {
                println!("{}", host_summary_line(host));
            }
            return;
        }
        for host in hosts {
            println!("{}", host_header_line(host).style(self.ctx.styles.header));
            for app in &host.apps {
                println!(
                    "  App: name={}, class={}, arch={}, vers={}",
                    app.name, app.class_name, app.arch, app.version
                );
                for inst in &app.inst {
                    let line = instance_summary_line(inst);
                    println!("    {}", line.style(self.ctx.styles.state(inst.state)));
                }
            }
        }
    }

    /// Render one instance as a key/value block headed by its application.
    pub fn render_instance(&self, app: &AppPath, info: &InstanceInfo) {
        println!("{}", format!("{app}:").style(self.ctx.styles.header));
        for (key, value) in instance_fields(info) {
            let value = if key == "State" {
                value.style(self.ctx.styles.state(info.state)).to_string()
            } else {
                value
            };
            println!("  {:<13}{value}", format!("{key}:").style(self.ctx.styles.dim));
        }
    }

    /// Render the files kept for an instance.
    pub fn render_files(&self, path: &InstancePath, files: &[FileInfo]) {
        if files.is_empty() {
            println!("No files available for download");
            return;
        }
        println!(
            "{}",
            format!("Resources available for instance: {path}:").style(self.ctx.styles.header)
        );
        for file in files {
            println!("  {}", file_line(file));
        }
    }

    /// Render the effective configuration.
    pub fn render_config(&self, config: &RlcConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<20} {}", "launcher.url:", config.launcher.url);
        println!("  {:<20} {}", "console.poll_ms:", config.console.poll_ms);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["RLC_CONFIG", "RLC_URL", "RUST_LOG", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Acknowledge a command that returns no data.
    pub fn render_done(&self, message: &str) {
        self.ctx.success(message);
    }
}

// ── Line formatters ───────────────────────────────────────────────────────────

/// `host: app1, app2`
#[must_use]
pub fn host_summary_line(host: &HostInfo) -> String {
    let apps: Vec<&str> = host.apps.iter().map(|a| a.name.as_str()).collect();
    format!("{}: {}", host.host_name, apps.join(", "))
}

/// `Host: name (arch) vers. version`
#[must_use]
pub fn host_header_line(host: &HostInfo) -> String {
    format!(
        "Host: {} ({}) vers. {}",
        host.host_name, host.arch, host.version
    )
}

/// `Instance=N, state=S` plus the pid while running.
#[must_use]
pub fn instance_summary_line(info: &InstanceInfo) -> String {
    format!("Instance={}, state={}{}", info.num, info.state, pid_suffix(info))
}

fn pid_suffix(info: &InstanceInfo) -> String {
    match info.pid {
        Some(pid) if info.is_running() => format!(" (pid={pid})"),
        _ => String::new(),
    }
}

/// Labelled fields of the instance block, in display order.
#[must_use]
pub fn instance_fields(info: &InstanceInfo) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Instance Num", info.num.to_string()),
        ("State", format!("{}{}", info.state, pid_suffix(info))),
        ("Persistent", info.persistent.to_string()),
        ("UnifyStdout", info.unifystdout.to_string()),
        ("Cmdline", format!("\"{}\"", info.cmdline)),
    ];
    if let Some(user) = &info.user {
        fields.push(("User name", format!("\"{user}\"")));
    }
    fields
}

/// One entry of a resource listing.
#[must_use]
pub fn file_line(file: &FileInfo) -> String {
    let run = file.run_num.map(|n| format!(" ({n})")).unwrap_or_default();
    let label = if file.stdout {
        format!("stdout{run}")
    } else if file.stderr {
        format!("stderr{run}")
    } else if file.log {
        "log".to_string()
    } else {
        format!("\"{}\"", file.name.as_deref().unwrap_or_default())
    };
    format!("{label}: size={} bytes", file.size)
}
