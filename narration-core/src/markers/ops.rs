use narration_types::MarkerId;

use super::MarkerItem;
use crate::history::Command;

/// A single undoable marker edit. Each variant carries everything needed
/// to replay it in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerOp {
    Add(MarkerItem),
    Delete(MarkerItem),
    Move { id: MarkerId, from: u32, to: u32 },
}

impl MarkerOp {
    pub fn id(&self) -> MarkerId {
        match self {
            MarkerOp::Add(item) | MarkerOp::Delete(item) => item.id,
            MarkerOp::Move { id, .. } => *id,
        }
    }
}

impl Command<Vec<MarkerItem>> for MarkerOp {
    fn apply(&self, items: &mut Vec<MarkerItem>) {
        match self {
            MarkerOp::Add(item) => items.push(item.clone()),
            MarkerOp::Delete(item) => items.retain(|i| i.id != item.id),
            MarkerOp::Move { id, to, .. } => relocate(items, *id, *to),
        }
    }

    fn invert(&self, items: &mut Vec<MarkerItem>) {
        match self {
            MarkerOp::Add(item) => items.retain(|i| i.id != item.id),
            MarkerOp::Delete(item) => items.push(item.clone()),
            MarkerOp::Move { id, from, .. } => relocate(items, *id, *from),
        }
    }
}

fn relocate(items: &mut [MarkerItem], id: MarkerId, frame: u32) {
    if let Some(item) = items.iter_mut().find(|i| i.id == id) {
        item.marker = item.marker.with_location(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use narration_types::AudioMarker;

    fn item(id: u32, frame: u32) -> MarkerItem {
        MarkerItem::new(AudioMarker::verse(id + 1, frame), true, MarkerId::new(id))
    }

    #[test]
    fn delete_then_invert_restores_item() {
        let mut items = vec![item(0, 100), item(1, 200)];
        let op = MarkerOp::Delete(items[0].clone());
        op.apply(&mut items);
        assert_eq!(items.len(), 1);
        op.invert(&mut items);
        assert!(items.iter().any(|i| i.id == MarkerId::new(0) && i.frame() == 100));
    }

    #[test]
    fn move_touches_only_its_id() {
        let mut items = vec![item(0, 100), item(1, 200)];
        let op = MarkerOp::Move {
            id: MarkerId::new(1),
            from: 200,
            to: 50,
        };
        op.apply(&mut items);
        assert_eq!(items[0].frame(), 100);
        assert_eq!(items[1].frame(), 50);
        op.invert(&mut items);
        assert_eq!(items[1].frame(), 200);
        assert_eq!(op.id(), MarkerId::new(1));
    }
}
