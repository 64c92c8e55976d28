use std::{
    any::Any,
    ops::{Deref, DerefMut},
};

use crate::renderer::Frame;

use super::{app::AppData, event::Event};

pub type ActivityResult = Box<dyn Any>;

pub struct Activities {
    activities: Vec<Activity>,
}

pub enum Change {
    Push(Activity),
    Pop { res: Option<ActivityResult> },
}

impl Change {
    pub fn push(activity: Activity) -> Self {
        Self::Push(activity)
    }

    pub fn pop() -> Self {
        Self::Pop { res: None }
    }

    pub fn pop_with<T: 'static>(res: T) -> Self {
        Self::Pop {
            res: Some(Box::new(res)),
        }
    }
}

impl Activities {
    pub fn new(base: Activity) -> Self {
        Self {
            activities: vec![base],
        }
    }

    pub fn empty() -> Self {
        Self { activities: vec![] }
    }

    pub fn push(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    pub fn pop(&mut self) {
        self.activities.pop();
    }

    pub fn active(&self) -> Option<&Activity> {
        self.activities.last()
    }

    pub fn active_mut(&mut self) -> Option<&mut Activity> {
        self.activities.last_mut()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

pub struct Activity {
    name: String,
    handler: Box<dyn ActivityHandler>,
}

impl Activity {
    pub fn new(name: impl Into<String>, handler: Box<dyn ActivityHandler>) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    pub fn new_boxed<H>(name: impl Into<String>, handler: H) -> Self
    where
        H: ActivityHandler + 'static,
    {
        Self::new(name, Box::new(handler))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Deref for Activity {
    type Target = dyn ActivityHandler;

    fn deref(&self) -> &Self::Target {
        &*self.handler
    }
}

impl DerefMut for Activity {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.handler
    }
}

pub trait ActivityHandler {
    #[must_use]
    fn update(&mut self, events: Vec<Event>, data: &mut AppData) -> Option<Change>;

    fn draw(&self, frame: &mut Frame);
}
