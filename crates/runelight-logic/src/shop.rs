//! Trader shop: fixed buy catalogue, flat sell price.

use crate::items::SlotContainer;

/// Coins paid for any item sold to the trader.
pub const SELL_PRICE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopItem {
    pub name: &'static str,
    pub price: u32,
}

pub const CATALOGUE: [ShopItem; 5] = [
    ShopItem { name: "Bread", price: 8 },
    ShopItem { name: "Bronze Sword", price: 40 },
    ShopItem { name: "Small Shield", price: 30 },
    ShopItem { name: "Bronze Pickaxe", price: 25 },
    ShopItem { name: "Fishing Rod", price: 18 },
];

pub fn price_of(item: &str) -> Option<u32> {
    CATALOGUE.iter().find(|i| i.name == item).map(|i| i.price)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    Bought { price: u32 },
    NotEnoughCoins,
    InventoryFull,
    NotStocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sale {
    Sold { price: u32 },
    NotCarried,
}

/// Buy one `item`. Coins are only taken when the item fits.
pub fn buy(item: &str, coins: &mut u32, inventory: &mut SlotContainer) -> Purchase {
    let Some(price) = price_of(item) else {
        return Purchase::NotStocked;
    };
    if *coins < price {
        return Purchase::NotEnoughCoins;
    }
    if !inventory.add(item) {
        return Purchase::InventoryFull;
    }
    *coins -= price;
    Purchase::Bought { price }
}

/// Sell the first `item` in the inventory.
pub fn sell(item: &str, coins: &mut u32, inventory: &mut SlotContainer) -> Sale {
    let Some(index) = inventory.position(item) else {
        return Sale::NotCarried;
    };
    inventory.take(index);
    *coins += SELL_PRICE;
    Sale::Sold { price: SELL_PRICE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_deducts_and_adds() {
        let mut coins = 125;
        let mut inv = SlotContainer::inventory();
        assert_eq!(buy("Bronze Sword", &mut coins, &mut inv), Purchase::Bought { price: 40 });
        assert_eq!(coins, 85);
        assert_eq!(inv.get(0), Some("Bronze Sword"));
    }

    #[test]
    fn buy_requires_coins() {
        let mut coins = 7;
        let mut inv = SlotContainer::inventory();
        assert_eq!(buy("Bread", &mut coins, &mut inv), Purchase::NotEnoughCoins);
        assert_eq!(coins, 7);
        assert!(inv.is_empty());
    }

    #[test]
    fn buy_with_full_inventory_keeps_coins() {
        let mut coins = 100;
        let mut inv = SlotContainer::new(1);
        inv.add("Logs");
        assert_eq!(buy("Bread", &mut coins, &mut inv), Purchase::InventoryFull);
        assert_eq!(coins, 100);
    }

    #[test]
    fn unknown_items_are_not_stocked() {
        let mut coins = 100;
        let mut inv = SlotContainer::inventory();
        assert_eq!(buy("Dragon Sword", &mut coins, &mut inv), Purchase::NotStocked);
    }

    #[test]
    fn sell_pays_flat_price() {
        let mut coins = 0;
        let mut inv = SlotContainer::inventory();
        inv.add("Goo");
        assert_eq!(sell("Goo", &mut coins, &mut inv), Sale::Sold { price: 5 });
        assert_eq!(coins, 5);
        assert!(inv.is_empty());
        assert_eq!(sell("Goo", &mut coins, &mut inv), Sale::NotCarried);
    }
}
