use crate::models::{EnergyPack, Item};

/// Items and energy packs on sale. Fixed at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub energy_packs: Vec<EnergyPack>,
}

impl Catalog {
    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_active)
    }

    /// Distinct categories of active items, in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in self.active_items() {
            if !categories.contains(&item.item_type.as_str()) {
                categories.push(&item.item_type);
            }
        }
        categories
    }
}

impl Default for Catalog {
    fn default() -> Self {
        const ITEMS: &[(&str, i64, &str)] = &[
            ("Green Cap", 30, "hat"),
            ("Blue Cap", 35, "hat"),
            ("Red Cap", 40, "hat"),
            ("Green T-Shirt", 45, "clothes"),
            ("Blue T-Shirt", 50, "clothes"),
            ("Black T-Shirt", 55, "clothes"),
            ("Sneakers", 60, "shoes"),
            ("Red Sneakers", 65, "shoes"),
            ("White Sneakers", 70, "shoes"),
            ("Jeans", 70, "clothes"),
            ("Green Trousers", 75, "clothes"),
            ("Backpack", 80, "accessory"),
            ("Sunglasses", 85, "accessory"),
            ("Sports Watch", 90, "accessory"),
        ];
        const PACKS: &[(&str, i64, i64)] = &[
            ("Small Energy Pack", 20, 15),
            ("Medium Energy Pack", 50, 35),
            ("Large Energy Pack", 100, 60),
        ];

        let items = ITEMS
            .iter()
            .zip(1u32..)
            .map(|(&(name, price, item_type), id)| Item {
                id,
                name: name.to_string(),
                price,
                item_type: item_type.to_string(),
                energy_boost: 0,
                is_active: true,
            })
            .collect();
        let energy_packs = PACKS
            .iter()
            .zip(1u32..)
            .map(|(&(name, energy_amount, price), id)| EnergyPack {
                id,
                name: name.to_string(),
                energy_amount,
                price,
                description: format!("{energy_amount} energy"),
            })
            .collect();

        Self { items, energy_packs }
    }
}
