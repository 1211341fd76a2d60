// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::ls::LsCommand;
use super::make::MakeCommand;
use super::mkdir::MkdirCommand;
use super::prompt::PromptCommand;
use super::pwd::PwdCommand;
use super::stubs::{LsrCommand, RmCommand, RmrCommand};

/// Create the registry holding every shell command.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(MakeCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(PromptCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(RmrCommand));
    registry.register(Box::new(LsrCommand));
    registry
}
