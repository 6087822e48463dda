use crate::core::Point;

/// Schnappschuss einer Knotenliste.
pub type KnotSnapshot = Vec<Point>;

/// Undo/Redo über Knotenlisten mit expliziten Checkpoints.
///
/// Nur die Knoten werden gesichert. Ist `pos == stack.len()`, weicht der
/// aktuelle Zustand vom letzten Eintrag ab. Ist `pos < stack.len()`, entspricht
/// er `stack[pos]` und alle Einträge dahinter sind Redo-Zustände.
#[derive(Debug, Clone, Default)]
pub struct KnotHistory {
    undo_stack: Vec<KnotSnapshot>,
    undo_stack_pos: usize,
}

impl KnotHistory {
    /// Erstellt eine leere History.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sichert `knots` unmittelbar vor einer Änderung.
    ///
    /// Verwirft alle Redo-Einträge.
    pub fn checkpoint(&mut self, knots: &[Point]) {
        self.undo_stack.truncate(self.undo_stack_pos);
        self.undo_stack.push(knots.to_vec());
        self.undo_stack_pos = self.undo_stack.len();
    }

    /// Stellt den vorherigen Zustand in `knots` wieder her.
    ///
    /// Gibt `false` zurück, wenn nichts rückgängig zu machen ist.
    pub fn undo(&mut self, knots: &mut Vec<Point>) -> bool {
        if self.undo_stack_pos < 1 {
            return false;
        }
        if self.undo_stack_pos == self.undo_stack.len() {
            self.undo_stack.push(knots.clone());
        }
        self.undo_stack_pos -= 1;
        *knots = self.undo_stack[self.undo_stack_pos].clone();
        true
    }

    /// Stellt den zuletzt rückgängig gemachten Zustand wieder her.
    ///
    /// Gibt `false` zurück, wenn kein Redo-Eintrag vorhanden ist.
    pub fn redo(&mut self, knots: &mut Vec<Point>) -> bool {
        if self.undo_stack_pos + 1 >= self.undo_stack.len() {
            return false;
        }
        self.undo_stack_pos += 1;
        *knots = self.undo_stack[self.undo_stack_pos].clone();
        true
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.undo_stack_pos >= 1
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.undo_stack_pos + 1 < self.undo_stack.len()
    }

    /// Leert den Verlauf.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.undo_stack_pos = 0;
    }

    /// Aktuelle Position im Stack.
    pub fn position(&self) -> usize {
        self.undo_stack_pos
    }

    /// Anzahl gespeicherter Schnappschüsse.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Gibt `true` zurück, wenn keine Schnappschüsse vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
