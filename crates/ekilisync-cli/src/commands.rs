//! Subcommand handlers. Each one is a composition of repository calls.

use anyhow::{Context as _, Result, bail};
use chrono::DateTime;
use ekilisync_core::Ekilisync;
use ekilisync_core::domain::{
    Partner, StatusFilter, Task, TaskId, TaskItem, TaskItemId, TaskList, TaskListId,
};
use ekilisync_core::observability::TaskCounts;
use ekilisync_core::ports::{Clock, IdGenerator, SystemClock, UlidGenerator};

use crate::{ListCommand, PartnerCommand, TaskCommand, TaskListArgs};

pub struct Context {
    pub app: Ekilisync,
    pub clock: SystemClock,
    pub ids: UlidGenerator<SystemClock>,
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{field} is required");
    }
    Ok(())
}

fn mark(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

impl TaskListArgs {
    fn filter(&self) -> StatusFilter {
        match (self.completed, self.all) {
            (_, true) => StatusFilter::All,
            (true, false) => StatusFilter::Completed,
            (false, false) => StatusFilter::Active,
        }
    }
}

pub async fn task(ctx: &Context, cmd: TaskCommand) -> Result<()> {
    let tasks = ctx.app.tasks();
    match cmd {
        TaskCommand::List(args) => {
            let all = tasks.get_tasks().await;
            let shown = args.filter().apply(&all);
            if shown.is_empty() {
                println!("No tasks.");
            }
            for t in shown {
                let due = t.due_date.as_deref().map(|d| format!(" (due {d})")).unwrap_or_default();
                println!("{} {}  {}{}", mark(t.completed), t.id, t.title, due);
                if !t.description.is_empty() {
                    println!("      {}", t.description);
                }
            }
        }
        TaskCommand::Add {
            title,
            description,
            due,
        } => {
            require_text("Title", &title)?;
            let mut task = Task::new(ctx.ids.task_id(), title.trim(), description, ctx.clock.now());
            if let Some(due) = due {
                DateTime::parse_from_rfc3339(&due)
                    .with_context(|| format!("invalid due date: {due}"))?;
                task = task.with_due_date(due);
            }
            let id = task.id.clone();
            tasks.add_task(task).await.context("Failed to add task")?;
            println!("Added task {id}");
        }
        TaskCommand::Toggle { id } => {
            let id = TaskId::new(id);
            let Some(current) = tasks.get_tasks().await.into_iter().find(|t| t.id == id) else {
                bail!("no task with id {id}");
            };
            let updated = current.toggled();
            let done = updated.completed;
            tasks.update_task(updated).await.context("Failed to update task")?;
            println!("{} {id}", mark(done));
        }
        TaskCommand::Rm { id } => {
            tasks
                .delete_task(&TaskId::new(id.as_str()))
                .await
                .context("Failed to delete task")?;
            println!("Deleted task {id}");
        }
        TaskCommand::Stats => {
            let counts = TaskCounts::from_entries(&tasks.get_tasks().await);
            println!(
                "{}/{} completed ({:.0}%), {} active",
                counts.completed,
                counts.total,
                counts.progress() * 100.0,
                counts.active
            );
        }
    }
    Ok(())
}

pub async fn list(ctx: &Context, cmd: ListCommand) -> Result<()> {
    let lists = ctx.app.task_lists();
    match cmd {
        ListCommand::Show => {
            let all = lists.get_task_lists().await;
            if all.is_empty() {
                println!("No task lists.");
            }
            for list in &all {
                let counts = TaskCounts::for_list(list);
                println!("{}  {} ({}/{})", list.id, list.name, counts.completed, counts.total);
                for item in &list.items {
                    println!("    {} {}  {}", mark(item.completed), item.id, item.content);
                }
            }
        }
        ListCommand::Add { name, items } => {
            require_text("Task list name", &name)?;
            let now = ctx.clock.now();
            let items = items
                .into_iter()
                .filter(|text| !text.trim().is_empty())
                .map(|text| TaskItem::new(ctx.ids.task_item_id(), text, now))
                .collect();
            let list = TaskList::new(ctx.ids.task_list_id(), name.trim(), now).with_items(items);
            let id = list.id.clone();
            lists.add_task_list(list).await.context("Failed to add task list")?;
            println!("Added task list {id}");
        }
        ListCommand::Rm { id } => {
            lists
                .delete_task_list(&TaskListId::new(id.as_str()))
                .await
                .context("Failed to delete task list")?;
            println!("Deleted task list {id}");
        }
        ListCommand::ItemAdd { list, text } => {
            require_text("Item", &text)?;
            let item = TaskItem::new(ctx.ids.task_item_id(), text, ctx.clock.now());
            let item_id = item.id.clone();
            lists
                .add_item(&TaskListId::new(list.as_str()), item)
                .await
                .context("Failed to add item")?;
            println!("Added item {item_id} to {list}");
        }
        ListCommand::ItemToggle { list, item } => {
            let list_id = TaskListId::new(list);
            let item_id = TaskItemId::new(item);
            let Some(current) = lists
                .get_task_list(&list_id)
                .await
                .and_then(|l| l.item(&item_id).cloned())
            else {
                bail!("no item {item_id} in list {list_id}");
            };
            let updated = current.toggled();
            let done = updated.completed;
            lists
                .update_item(&list_id, updated)
                .await
                .context("Failed to update item")?;
            println!("{} {item_id}", mark(done));
        }
        ListCommand::ItemRm { list, item } => {
            lists
                .delete_item(&TaskListId::new(list.as_str()), &TaskItemId::new(item.as_str()))
                .await
                .context("Failed to delete item")?;
            println!("Deleted item {item} from {list}");
        }
    }
    Ok(())
}

pub async fn partner(ctx: &Context, cmd: PartnerCommand) -> Result<()> {
    let repo = ctx.app.partner();
    match cmd {
        PartnerCommand::Show => match repo.get_partner().await {
            Some(p) => {
                let state = if p.connected { "connected" } else { "not connected" };
                println!("{} <{}> ({state})", p.name, p.email);
            }
            None => println!("No partner set."),
        },
        PartnerCommand::Set { name, email } => {
            require_text("Name", &name)?;
            require_text("Email", &email)?;
            let partner = Partner::new(ctx.ids.partner_id(), name.trim(), email.trim()).connected();
            repo.set_partner(&partner)
                .await
                .context("Failed to save partner")?;
            println!("Partner set to {}", partner.name);
        }
        PartnerCommand::Clear => {
            repo.clear_partner().await.context("Failed to clear partner")?;
            println!("Partner cleared.");
        }
    }
    Ok(())
}
