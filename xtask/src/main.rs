// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Build automation tasks for the Ochre workspace.
// Run with: cargo xtask <command>

use anyhow::{bail, Result};
use std::process::Command;
use std::time::Instant;

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";

struct Task {
    name: &'static str,
    description: &'static str,
    args: &'static [&'static str],
}

const TASKS: &[Task] = &[
    Task {
        name: "build",
        description: "Build all crates",
        args: &["build", "--workspace"],
    },
    Task {
        name: "test",
        description: "Run unit, integration and doc tests",
        args: &["test", "--workspace"],
    },
    Task {
        name: "check",
        description: "Check code without building executables",
        args: &["check", "--workspace"],
    },
    Task {
        name: "format",
        description: "Format all code with rustfmt",
        args: &["fmt", "--all"],
    },
    Task {
        name: "clippy",
        description: "Run clippy with warnings as errors",
        args: &["clippy", "--workspace", "--", "-D", "warnings"],
    },
];

fn print_help() {
    println!("{BOLD}{CYAN}Ochre build automation{RESET}");
    println!("\n{BOLD}Usage:{RESET} cargo xtask <command>\n");
    println!("{BOLD}Available commands:{RESET}");
    for task in TASKS {
        println!("  {BOLD}{:<8}{RESET}- {}", task.name, task.description);
    }
    println!("  {BOLD}all     {RESET}- Run every task in order");
}

fn execute(task: &Task) -> Result<()> {
    let full_command = format!("cargo {}", task.args.join(" "));
    println!("\n{BOLD}{CYAN}━━━ {} ━━━{RESET}", task.name);
    println!("{BOLD}Command:{RESET} {full_command}");

    let start_time = Instant::now();
    let status = Command::new("cargo").args(task.args).status()?;
    let duration = start_time.elapsed().as_secs_f64();

    if status.success() {
        println!("{BOLD}{GREEN}✓ {} completed in {duration:.2}s{RESET}", task.name);
        Ok(())
    } else {
        println!("{BOLD}{RED}✗ {} failed after {duration:.2}s{RESET}", task.name);
        bail!("task '{}' failed", task.name);
    }
}

fn run_all() -> Result<()> {
    let start_time = Instant::now();
    let mut failures = 0;
    for task in TASKS {
        if execute(task).is_err() {
            failures += 1;
        }
    }
    let total = start_time.elapsed().as_secs_f64();

    if failures == 0 {
        println!("\n{BOLD}{GREEN}✓ All {} tasks passed in {total:.2}s{RESET}", TASKS.len());
        Ok(())
    } else {
        println!(
            "\n{BOLD}{YELLOW}⚠ {}/{} tasks failed ({total:.2}s){RESET}",
            failures,
            TASKS.len()
        );
        bail!("{failures} task(s) failed");
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_help();
        return Ok(());
    };

    match command.as_str() {
        "all" => run_all(),
        name => match TASKS.iter().find(|task| task.name == name) {
            Some(task) => execute(task),
            None => {
                println!("{BOLD}{RED}Unknown command: {name}{RESET}\n");
                print_help();
                bail!("unknown command");
            }
        },
    }
}
