//! Individual command implementations.

mod add;
mod generate;
mod help;
mod list;
mod quit;
mod remove;
mod show;
mod sites;
mod update;

pub use add::AddCommand;
pub use generate::GenerateCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use quit::QuitCommand;
pub use remove::RemoveCommand;
pub use show::ShowCommand;
pub use sites::SitesCommand;
pub use update::UpdateCommand;

use std::sync::Arc;

use super::command::CommandRegistry;

/// Registers all built-in commands with the registry.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Arc::new(AddCommand));
    registry.register(Arc::new(ShowCommand));
    registry.register(Arc::new(RemoveCommand));
    registry.register(Arc::new(UpdateCommand));
    registry.register(Arc::new(GenerateCommand));
    registry.register(Arc::new(ListCommand));
    registry.register(Arc::new(SitesCommand));
    registry.register(Arc::new(HelpCommand));
    registry.register(Arc::new(QuitCommand));
}
