//! # shell 命令实现
//!
//! 交互式会话：逐行读取命令，对同一个会话反复添加、删除、清空与转换。
//!
//! ## 命令
//! - `add <path|glob>...`     显式添加文件
//! - `folder <dir>`           递归扫描目录
//! - `drop <path|glob>...`    混合文件与目录
//! - `remove <index|path>...` 删除选中项
//! - `clear` / `list`
//! - `set output|quality|lossless|metadata <value>`
//! - `convert [dir]` / `help` / `quit`
//!
//! ## 依赖关系
//! - 使用 `cli/shell.rs` 定义的参数
//! - 使用 `session.rs`, `batch/`, `codec/`
//! - 使用 `console` 读取终端输入，`glob` 展开通配符

use super::{convert_with_spinner, options_from_args, report_added, report_cleared, report_removed};
use crate::batch::{AcceptedExtensions, BatchConverter};
use crate::cli::shell::ShellArgs;
use crate::codec::{Codec, WebpCodec};
use crate::error::{Result, WebpifyError};
use crate::models::options::parse_quality;
use crate::models::ConversionOptions;
use crate::session::Session;
use crate::utils::{output, report};

use colored::Colorize;
use console::Term;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// 每行命令执行后的流程控制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// 交互会话状态
struct ShellState<C> {
    session: Session,
    converter: BatchConverter<C>,
    output: Option<PathBuf>,
    options: ConversionOptions,
}

/// 执行 shell 命令
pub fn execute(args: ShellArgs) -> Result<()> {
    output::print_header("webpify interactive session");
    print_help();

    let session = Session::new(AcceptedExtensions::default());
    let accepted: Vec<&str> = session.accepted().iter().collect();
    output::print_info(&format!("Accepted input types: {}", accepted.join(", ")));

    let options = options_from_args(&args.encode);
    let mut state = ShellState {
        session,
        converter: BatchConverter::new(WebpCodec::new(), args.encode.jobs),
        output: args.output.output,
        options,
    };

    let term = Term::stdout();
    loop {
        term.write_str(&format!("{} ", "webpify>".cyan().bold())).ok();
        let Some(line) = next_line(&term) else {
            break;
        };

        match state.execute_line(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => output::print_error(&e.to_string()),
        }
    }

    Ok(())
}

/// 读取下一行；非终端输入在 EOF 时返回 `None`
fn next_line(term: &Term) -> Option<String> {
    if term.is_term() {
        return term.read_line().ok();
    }

    let mut buf = String::new();
    match io::stdin().lock().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
    }
}

impl<C: Codec> ShellState<C> {
    fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let rest: Vec<&str> = words.collect();

        match command.to_lowercase().as_str() {
            "add" => {
                let paths = expand_patterns(&rest)?;
                report_added(self.session.on_files_picked(&paths), "the given paths");
            }
            "folder" => {
                let root = joined_path(&rest, "folder <dir>")?;
                report_added(
                    self.session.on_folder_picked(&root),
                    &format!("'{}'", root.display()),
                );
            }
            "drop" => {
                let items = expand_patterns(&rest)?;
                report_added(self.session.on_drop_payload(&items), "dropped items");
            }
            "remove" | "rm" => {
                let paths = self.resolve_selection(&rest);
                report_removed(self.session.on_remove_selected(&paths));
            }
            "clear" => report_cleared(self.session.on_clear_requested()),
            "list" | "ls" => self.print_selection(),
            "set" => self.set(&rest)?,
            "convert" => self.convert(&rest)?,
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            other => {
                return Err(WebpifyError::InvalidArgument(format!(
                    "unknown command '{}', type 'help'",
                    other
                )))
            }
        }

        Ok(Flow::Continue)
    }

    /// 将序号（从 1 开始，对应 `list` 输出）或路径解析为选中路径
    fn resolve_selection(&self, tokens: &[&str]) -> Vec<PathBuf> {
        let snapshot = self.session.selection().snapshot();
        tokens
            .iter()
            .map(|t| match t.parse::<usize>() {
                Ok(i) if (1..=snapshot.len()).contains(&i) => snapshot[i - 1].clone(),
                _ => PathBuf::from(t),
            })
            .collect()
    }

    fn print_selection(&self) {
        let selection = self.session.selection();
        if selection.is_empty() {
            output::print_info("Selection is empty.");
            return;
        }
        for (i, path) in selection.iter().enumerate() {
            output::print_item(i + 1, &path.display().to_string());
        }
        output::print_info(&format!("{} file(s) selected", selection.len()));
    }

    fn set(&mut self, args: &[&str]) -> Result<()> {
        let (key, value) = match args {
            [key, value @ ..] if !value.is_empty() => (key.to_lowercase(), value.join(" ")),
            _ => {
                return Err(WebpifyError::InvalidArgument(
                    "usage: set output|quality|lossless|metadata <value>".to_string(),
                ))
            }
        };

        match key.as_str() {
            "output" => {
                self.output = Some(PathBuf::from(&value));
                output::print_info(&format!("Output folder: {}", value));
            }
            "quality" => {
                self.options.quality = parse_quality(&value);
                output::print_info(&format!("Quality: {}", self.options.quality));
            }
            "lossless" => {
                self.options.lossless = parse_switch(&value, "on", "off")?;
                output::print_info(&format!("Lossless: {}", self.options.lossless));
            }
            "metadata" => {
                self.options.strip_metadata = !parse_switch(&value, "keep", "strip")?;
                let mode = if self.options.strip_metadata { "strip" } else { "keep" };
                output::print_info(&format!("Metadata: {}", mode));
            }
            other => {
                return Err(WebpifyError::InvalidArgument(format!(
                    "unknown setting '{}'",
                    other
                )))
            }
        }
        Ok(())
    }

    fn convert(&mut self, args: &[&str]) -> Result<()> {
        if !args.is_empty() {
            self.output = Some(PathBuf::from(args.join(" ")));
        }
        let output_dir = self.output.clone().ok_or_else(|| {
            WebpifyError::InvalidArgument("choose an output folder first (set output <dir>)".to_string())
        })?;

        let report = convert_with_spinner(&self.session, &self.converter, &output_dir, &self.options)?;
        report::print_report(&report);
        Ok(())
    }
}

/// 展开通配符；没有匹配的模式按原样保留
fn expand_patterns(patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let matches: Vec<PathBuf> = glob::glob(pattern)
            .map_err(|e| {
                WebpifyError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
            })?
            .filter_map(|p| p.ok())
            .collect();

        if matches.is_empty() {
            paths.push(PathBuf::from(pattern));
        } else {
            paths.extend(matches);
        }
    }
    Ok(paths)
}

/// 单路径参数，允许路径中含空格
fn joined_path(args: &[&str], usage: &str) -> Result<PathBuf> {
    if args.is_empty() {
        return Err(WebpifyError::InvalidArgument(format!("usage: {}", usage)));
    }
    Ok(PathBuf::from(args.join(" ")))
}

fn parse_switch(value: &str, on: &str, off: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        v if v == on || v == "true" || v == "yes" => Ok(true),
        v if v == off || v == "false" || v == "no" => Ok(false),
        _ => Err(WebpifyError::InvalidArgument(format!(
            "expected '{}' or '{}', got '{}'",
            on, off, value
        ))),
    }
}

fn print_help() {
    let lines = [
        ("add <path|glob>...", "add image files as picked"),
        ("folder <dir>", "scan a folder recursively for images"),
        ("drop <path|glob>...", "add a mix of files and folders"),
        ("remove <n|path>...", "remove items by list number or path"),
        ("clear", "remove every selected file"),
        ("list", "show the selection"),
        ("set output <dir>", "choose the output folder"),
        ("set quality <0-100>", "lossy quality (invalid input -> 80)"),
        ("set lossless on|off", "toggle lossless encoding"),
        ("set metadata keep|strip", "keep or strip EXIF"),
        ("convert [dir]", "convert the selection"),
        ("quit", "leave the session"),
    ];
    for (cmd, desc) in lines {
        println!("  {:<26} {}", cmd.bold(), desc.dimmed());
    }
    println!();
}
