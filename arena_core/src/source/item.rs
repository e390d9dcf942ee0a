//! ItemSource - Stats from an inventory item

use crate::entity::Item;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Stats from one held item
pub struct ItemSource<'a> {
    pub item: &'a Item,
}

impl<'a> ItemSource<'a> {
    pub fn new(item: &'a Item) -> Self {
        ItemSource { item }
    }
}

impl StatSource for ItemSource<'_> {
    fn id(&self) -> &str {
        &self.item.name
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_bonus(self.item.kind, self.item.bonus);
    }
}
