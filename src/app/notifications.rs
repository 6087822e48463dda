//! Benachrichtigungen an die Präsentationsschicht.
//!
//! Mutierende Commands reihen Events ein; der Controller stellt sie nach
//! Abschluss eines Intents synchron an alle Abonnenten zu.

use crate::core::AxisKind;
use std::sync::mpsc::{self, Receiver, Sender};

/// Ereignis nach einer abgeschlossenen Änderung.
///
/// Beim Setzen eines Kalibrierpunkts sehen Abonnenten zuerst `Changed`,
/// danach `AxisPointSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// Kurve oder Kalibrierung hat sich geändert (ohne Nutzlast)
    Changed,
    /// Ein Kalibrierpunkt wurde gesetzt
    AxisPointSet {
        /// Art des Ankers
        kind: AxisKind,
        /// Index des Ankers (0 für den Ursprung)
        index: usize,
    },
}

/// Verteilt [`EditorEvent`]s über Kanäle an Abonnenten.
#[derive(Default)]
pub struct EditorNotifier {
    subscribers: Vec<Sender<EditorEvent>>,
    pending: Vec<EditorEvent>,
}

impl EditorNotifier {
    /// Erstellt einen Notifier ohne Abonnenten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen neuen Abonnenten.
    pub fn subscribe(&mut self) -> Receiver<EditorEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Reiht ein Event zur Zustellung ein.
    ///
    /// Mehrfache `Changed` innerhalb einer Zustellung werden zusammengefasst.
    pub fn queue(&mut self, event: EditorEvent) {
        if event == EditorEvent::Changed && self.pending.contains(&EditorEvent::Changed) {
            return;
        }
        self.pending.push(event);
    }

    /// Stellt alle eingereihten Events zu. Getrennte Abonnenten werden entfernt.
    pub fn dispatch(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        self.subscribers
            .retain(|tx| pending.iter().all(|event| tx.send(*event).is_ok()));
        log::debug!(
            "{} Events an {} Abonnenten zugestellt",
            pending.len(),
            self.subscribers.len()
        );
    }

    /// Noch nicht zugestellte Events.
    pub fn pending(&self) -> &[EditorEvent] {
        &self.pending
    }

    /// Anzahl aktiver Abonnenten.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
