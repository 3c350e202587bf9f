//! Store configuration: room layout, menu catalog, recipe map, seed stock
//!
//! All of this is read-only input to the engine. The menu is consulted
//! only when constructing orders (prices are copied into line items, never
//! referenced); the recipe map drives inventory deduction; rooms and seed
//! stock provide the initial state when durable storage is empty.

use shared::TableStatus;
use std::collections::{BTreeMap, HashMap};

/// A room and the number of pre-seeded tables it holds (`T1`..`T{n}`)
#[derive(Debug, Clone)]
pub struct RoomConfig {
    pub name: String,
    pub tables: u32,
}

impl RoomConfig {
    pub fn new(name: impl Into<String>, tables: u32) -> Self {
        Self {
            name: name.into(),
            tables,
        }
    }
}

/// One priced menu entry
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

/// A menu category and its items
#[derive(Debug, Clone)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Static configuration injected into [`crate::PosStore`]
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub rooms: Vec<RoomConfig>,
    pub menu: Vec<MenuCategory>,
    /// menu item name -> ingredient -> quantity consumed per unit
    pub recipes: HashMap<String, HashMap<String, f64>>,
    pub seed_stock: BTreeMap<String, f64>,
}

impl StoreConfig {
    /// Menu price lookup by item name (first match across categories)
    pub fn price_of(&self, item_name: &str) -> Option<f64> {
        self.menu
            .iter()
            .flat_map(|c| &c.items)
            .find(|i| i.name == item_name)
            .map(|i| i.price)
    }

    /// The full pre-seeded registry, every table `Available`
    pub fn seed_tables(&self) -> BTreeMap<String, BTreeMap<String, TableStatus>> {
        self.rooms
            .iter()
            .map(|room| {
                let tables = (1..=room.tables)
                    .map(|i| (format!("T{i}"), TableStatus::Available))
                    .collect();
                (room.name.clone(), tables)
            })
            .collect()
    }
}

fn menu_category(name: &str, items: &[(&str, f64)]) -> MenuCategory {
    MenuCategory {
        name: name.to_string(),
        items: items
            .iter()
            .map(|(n, p)| MenuItem {
                name: n.to_string(),
                price: *p,
            })
            .collect(),
    }
}

fn recipe(ingredients: &[(&str, f64)]) -> HashMap<String, f64> {
    ingredients
        .iter()
        .map(|(name, qty)| (name.to_string(), *qty))
        .collect()
}

impl Default for StoreConfig {
    /// The shipped single-restaurant layout: seven rooms of fifteen tables,
    /// the kitchen's recipe map, and opening stock levels.
    fn default() -> Self {
        let rooms = [
            "Restaurant",
            "Meeting Room",
            "Board Room",
            "Garden",
            "Majlis(RM6&7)",
            "Party Hall",
            "TakeAway",
        ]
        .into_iter()
        .map(|name| RoomConfig::new(name, 15))
        .collect();

        let menu = vec![
            menu_category(
                "NON-VEG STARTERS",
                &[
                    ("Chicken 65", 8.99),
                    ("Chilli Chicken", 8.99),
                    ("Pepper Chicken", 8.99),
                    ("Chicken Lollipop (5 pcs)", 8.99),
                    ("Apollo Fish", 9.99),
                    ("Golden Fried Prawns", 11.99),
                ],
            ),
            menu_category(
                "VEG STARTERS",
                &[
                    ("Veg Samosa (3 pcs)", 3.99),
                    ("Paneer 65", 9.99),
                    ("Chilli Paneer", 9.99),
                    ("Paneer Tikka", 9.99),
                ],
            ),
            menu_category(
                "MAIN COURSE",
                &[
                    ("Butter Chicken", 8.99),
                    ("Chicken Tikka Masala", 8.99),
                    ("Lamb Curry", 9.99),
                    ("Kadai Paneer", 9.99),
                    ("Dal Tadka", 7.99),
                ],
            ),
            menu_category(
                "SOUTH INDIAN",
                &[("Dosa", 4.99), ("Idli", 3.99)],
            ),
            menu_category(
                "BREADS",
                &[
                    ("Plain Naan", 1.49),
                    ("Butter Naan", 1.99),
                    ("Garlic Chilli Naan", 2.49),
                ],
            ),
            menu_category(
                "HOT DRINKS",
                &[
                    ("Irani Chai", 2.5),
                    ("Cardamom Tea", 2.5),
                    ("Coffee", 2.5),
                ],
            ),
            menu_category(
                "DESSERTS",
                &[("Kheer", 4.99), ("Gulab Jamun", 4.99)],
            ),
        ];

        let recipes = HashMap::from([
            (
                "Chicken 65".to_string(),
                recipe(&[("chicken", 1.0), ("spices", 0.2)]),
            ),
            (
                "Paneer 65".to_string(),
                recipe(&[("paneer", 1.0), ("spices", 0.2)]),
            ),
            (
                "Butter Chicken".to_string(),
                recipe(&[
                    ("chicken", 1.0),
                    ("butter", 0.2),
                    ("cream", 0.1),
                    ("spices", 0.2),
                ]),
            ),
            ("Dosa".to_string(), recipe(&[("riceFlour", 0.5)])),
            ("Idli".to_string(), recipe(&[("riceFlour", 0.3)])),
            (
                "Irani Chai".to_string(),
                recipe(&[("tea", 0.1), ("milk", 0.2)]),
            ),
        ]);

        let seed_stock = BTreeMap::from(
            [
                ("chicken", 50.0),
                ("paneer", 20.0),
                ("spices", 10.0),
                ("butter", 5.0),
                ("cream", 5.0),
                ("riceFlour", 10.0),
                ("tea", 2.0),
                ("milk", 5.0),
                ("Fish", 5.0),
                ("Prawns", 5.0),
                ("Lamb", 5.0),
                ("Mutton", 5.0),
                ("Coffee", 5.0),
            ]
            .map(|(name, qty)| (name.to_string(), qty)),
        );

        Self {
            rooms,
            menu,
            recipes,
            seed_stock,
        }
    }
}
