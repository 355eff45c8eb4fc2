//! UI event system
//!
//! Key principles:
//! - Key-value arguments (no order dependency)
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Queuing support (immediate + deferred delivery)
//!
//! Widgets fire at most one notification per actual state change: a slider
//! whose clamped value did not move stays silent.

use std::collections::HashMap;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEventType {
    /// A button (or a widget's background) was clicked
    Clicked,
    /// A scale widget's value changed
    ValueChanged,
    /// A checkbox toggled
    CheckChanged,
    /// A text field's content changed
    TextChanged,
}

/// Variant for type-safe event arguments
#[derive(Debug, Clone)]
pub enum EventArg {
    /// Widget identifier
    WidgetId(String),
    /// New numeric value
    Value(f32),
    /// New checked state
    Checked(bool),
    /// New text content
    Text(String),
    /// Position coordinates
    Position(f32, f32),
}

/// Event with type ID and key-value arguments
#[derive(Debug, Clone)]
pub struct UiEvent {
    /// Type of event
    pub event_type: UiEventType,
    /// Timestamp when event was created (seconds)
    pub timestamp: f64,
    args: HashMap<&'static str, EventArg>,
}

impl UiEvent {
    /// Create a new event with the given type and timestamp
    pub fn new(event_type: UiEventType, timestamp: f64) -> Self {
        Self {
            event_type,
            timestamp,
            args: HashMap::new(),
        }
    }

    /// Add an argument to the event (builder pattern)
    #[must_use]
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }

    /// Get the source widget id if present
    pub fn widget_id(&self) -> Option<&str> {
        if let Some(EventArg::WidgetId(id)) = self.get_arg("widget") {
            Some(id)
        } else {
            None
        }
    }

    /// Get the value argument if present
    pub fn value(&self) -> Option<f32> {
        if let Some(EventArg::Value(v)) = self.get_arg("value") {
            Some(*v)
        } else {
            None
        }
    }

    /// Get the checked argument if present
    pub fn checked(&self) -> Option<bool> {
        if let Some(EventArg::Checked(c)) = self.get_arg("checked") {
            Some(*c)
        } else {
            None
        }
    }

    /// Get the text argument if present
    pub fn text(&self) -> Option<&str> {
        if let Some(EventArg::Text(t)) = self.get_arg("text") {
            Some(t)
        } else {
            None
        }
    }

    /// Get the position argument if present
    pub fn position(&self) -> Option<(f32, f32)> {
        if let Some(EventArg::Position(x, y)) = self.get_arg("position") {
            Some((*x, *y))
        } else {
            None
        }
    }
}

/// Event handler trait
///
/// Returns true if the event was consumed (stops forwarding to handlers
/// registered later for the same event type).
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &UiEvent) -> bool;
}

/// Event system with registration and queuing
///
/// Follows the chain-of-responsibility pattern: handlers run in registration
/// order until one consumes the event.
pub struct EventSystem {
    immediate_queue: Vec<UiEvent>,
    deferred_queue: Vec<(f64, UiEvent)>,
    handlers: HashMap<UiEventType, Vec<Box<dyn EventHandler>>>,
    current_time: f64,
}

impl EventSystem {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self {
            immediate_queue: Vec::new(),
            deferred_queue: Vec::new(),
            handlers: HashMap::new(),
            current_time: 0.0,
        }
    }

    /// Update current time (seconds since start)
    pub fn update_time(&mut self, time: f64) {
        self.current_time = time;
    }

    /// Register a handler for a specific event type
    pub fn register_handler(&mut self, event_type: UiEventType, handler: Box<dyn EventHandler>) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Send event for immediate handling this frame
    pub fn send(&mut self, event: UiEvent) {
        self.immediate_queue.push(event);
    }

    /// Post event for deferred delivery at specified time
    pub fn post(&mut self, delivery_time: f64, event: UiEvent) {
        self.deferred_queue.push((delivery_time, event));
    }

    /// Number of events waiting in the immediate queue
    pub fn pending(&self) -> usize {
        self.immediate_queue.len()
    }

    /// Drain the immediate queue without dispatching
    ///
    /// For applications that poll events instead of registering handlers.
    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.immediate_queue)
    }

    /// Dispatch all pending events
    ///
    /// Processes the immediate queue first, then due deferred events.
    pub fn dispatch(&mut self) {
        let immediate = std::mem::take(&mut self.immediate_queue);
        for event in immediate {
            self.dispatch_event(&event);
        }

        let mut i = 0;
        while i < self.deferred_queue.len() {
            if self.deferred_queue[i].0 <= self.current_time {
                let (_, event) = self.deferred_queue.remove(i);
                self.dispatch_event(&event);
            } else {
                i += 1;
            }
        }
    }

    /// Dispatch single event to registered handlers
    ///
    /// Stops on the first handler that returns true (consumed).
    fn dispatch_event(&mut self, event: &UiEvent) {
        if let Some(handlers) = self.handlers.get_mut(&event.event_type) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    break;
                }
            }
        }
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.immediate_queue.clear();
        self.deferred_queue.clear();
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}
