use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use taskz::api::{CmdMessage, MessageLevel, TaskzApi};
use taskz::error::{Result, TaskzError};
use taskz::model::{Task, TaskUpdate};
use taskz::store::fs::FileStore;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add { title }) => handle_add(&mut api, &title.join(" ")),
        Some(Commands::Done { task }) => handle_done(&mut api, &task),
        Some(Commands::Edit { task, title }) => handle_edit(&mut api, &task, &title.join(" ")),
        Some(Commands::Delete { task }) => handle_delete(&mut api, &task),
        Some(Commands::Show { task }) => handle_show(&mut api, &task),
        Some(Commands::List) | None => handle_list(&mut api),
    }
}

fn init_api(cli: &Cli) -> Result<TaskzApi<FileStore>> {
    let path = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "taskz", "taskz")
                .ok_or_else(|| TaskzError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().join("tasks.json")
        }
    };
    Ok(TaskzApi::new(FileStore::new(path)))
}

/// Resolve a CLI task reference: either a full id, or a 1-based position in
/// the current listing.
fn resolve_id(api: &mut TaskzApi<FileStore>, input: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }
    let n: usize = input
        .parse()
        .map_err(|_| TaskzError::Api(format!("Invalid task reference: {}", input)))?;
    let tasks = api.list();
    n.checked_sub(1)
        .and_then(|i| tasks.get(i))
        .map(|task| task.id)
        .ok_or_else(|| TaskzError::Api(format!("No task at position {}", n)))
}

fn handle_list(api: &mut TaskzApi<FileStore>) -> Result<()> {
    print_tasks(&api.list());
    Ok(())
}

fn handle_add(api: &mut TaskzApi<FileStore>, title: &str) -> Result<()> {
    let result = api.add(title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(api: &mut TaskzApi<FileStore>, task: &str) -> Result<()> {
    let id = resolve_id(api, task)?;
    let result = api.toggle_completed(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut TaskzApi<FileStore>, task: &str, title: &str) -> Result<()> {
    let id = resolve_id(api, task)?;
    let result = api.update(id, &TaskUpdate::title(title))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut TaskzApi<FileStore>, task: &str) -> Result<()> {
    let id = resolve_id(api, task)?;
    let result = api.delete(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &mut TaskzApi<FileStore>, task: &str) -> Result<()> {
    let id = resolve_id(api, task)?;
    let task = api.find_by_id(id)?.ok_or(TaskzError::TaskNotFound(id))?;
    println!("{}  {}", marker(&task), task.title.bold());
    println!("id: {}", task.id.to_string().dimmed());
    Ok(())
}

fn marker(task: &Task) -> ColoredString {
    if task.completed {
        "[x]".green()
    } else {
        "[ ]".normal()
    }
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for (i, task) in tasks.iter().enumerate() {
        let title = if task.completed {
            task.title.dimmed().strikethrough()
        } else {
            task.title.normal()
        };
        println!("{:>3}. {} {}", i + 1, marker(task), title);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
