//! Merchant-keyword category table and classifier.
//!
//! Lookup is a case-insensitive substring scan in table order: the first
//! keyword contained in the merchant name wins. Order is therefore part of
//! the contract — overlapping keywords (`cafe` vs `internet`, `bazar` vs
//! `bozor`) resolve by position. Extend by appending; do not reorder.

use crate::types::Category;

/// Flat keyword lookup covering common Uzbek retail, scanned in order.
pub const STORE_CATEGORY_MAP: &[(&str, Category)] = &[
    // Food / grocery
    ("korzinka", Category::Food),
    ("makro", Category::Food),
    ("macro", Category::Food),
    ("havas", Category::Food),
    ("carrefour", Category::Food),
    ("magnum", Category::Food),
    ("magnit", Category::Food),
    ("oqtepa", Category::Food),
    ("evos", Category::Food),
    ("burger", Category::Food),
    ("restaurant", Category::Food),
    ("restoran", Category::Food),
    ("cafe", Category::Food),
    ("coffee", Category::Food),
    ("kofe", Category::Food),
    ("stolovaya", Category::Food),
    ("oshxona", Category::Food),
    ("lavash", Category::Food),
    ("choyxona", Category::Food),
    ("bazar", Category::Food),
    ("supermarket", Category::Food),
    ("minimarket", Category::Food),
    ("produkti", Category::Food),
    ("bakkaleja", Category::Food),
    ("non", Category::Food),
    ("go'sht", Category::Food),
    ("meva", Category::Food),
    // Transport
    ("yandex go", Category::Transport),
    ("yandex taxi", Category::Transport),
    ("uber", Category::Transport),
    ("mycar", Category::Transport),
    ("uzairways", Category::Transport),
    ("avto", Category::Transport),
    ("benzin", Category::Transport),
    ("toplivo", Category::Transport),
    ("zapravka", Category::Transport),
    ("gaz station", Category::Transport),
    ("metro", Category::Transport),
    ("taksi", Category::Transport),
    // Utilities / telecom
    ("beeline", Category::Utilities),
    ("ucell", Category::Utilities),
    ("mobiuz", Category::Utilities),
    ("uzmobile", Category::Utilities),
    ("turon telecom", Category::Utilities),
    ("uztelecom", Category::Utilities),
    ("elektr", Category::Utilities),
    ("kommunal", Category::Utilities),
    ("issiqlik", Category::Utilities),
    ("suv", Category::Utilities),
    ("internet", Category::Utilities),
    ("suvokava", Category::Utilities),
    // Shopping
    ("mediapark", Category::Shopping),
    ("texnomart", Category::Shopping),
    ("zara", Category::Shopping),
    ("lcwaikiki", Category::Shopping),
    ("samsung", Category::Shopping),
    ("apple", Category::Shopping),
    ("kiyim", Category::Shopping),
    ("poyabzal", Category::Shopping),
    ("mebel", Category::Shopping),
    ("bozor", Category::Shopping),
    // Health
    ("apteka", Category::Health),
    ("dorixona", Category::Health),
    ("pharmacy", Category::Health),
    ("klinika", Category::Health),
    ("hospital", Category::Health),
    ("poliklinika", Category::Health),
    ("stomatolog", Category::Health),
    ("labaratoriya", Category::Health),
    // Entertainment
    ("kinoteatr", Category::Entertainment),
    ("cinema", Category::Entertainment),
    ("magic city", Category::Entertainment),
    ("aquapark", Category::Entertainment),
    ("park", Category::Entertainment),
    ("konsert", Category::Entertainment),
    // Education
    ("kitob", Category::Education),
    ("book", Category::Education),
    ("kurs", Category::Education),
    ("talim", Category::Education),
    ("universitet", Category::Education),
    ("maktab", Category::Education),
    ("repetitor", Category::Education),
    // Housing
    ("ijara", Category::Housing),
    ("arenda", Category::Housing),
    ("kvartira", Category::Housing),
];

/// Match a merchant name against known stores. `Other` when nothing matches.
pub fn guess_category(merchant_name: &str) -> Category {
    let name = merchant_name.trim().to_lowercase();
    if name.is_empty() {
        return Category::Other;
    }
    for (keyword, category) in STORE_CATEGORY_MAP {
        if name.contains(keyword) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grocery_chains() {
        assert_eq!(guess_category("Korzinka Chilanzar"), Category::Food);
        assert_eq!(guess_category("MAKRO SUPERMARKET"), Category::Food);
        assert_eq!(guess_category("Carrefour"), Category::Food);
    }

    #[test]
    fn test_transport_and_telecom() {
        assert_eq!(guess_category("YANDEX GO TASHKENT"), Category::Transport);
        assert_eq!(guess_category("Beeline oplata"), Category::Utilities);
    }

    #[test]
    fn test_mixed_script() {
        assert_eq!(guess_category("APTEKA 24"), Category::Health);
        assert_eq!(guess_category("Kinoteatr Alisher Navoiy"), Category::Entertainment);
    }

    #[test]
    fn test_first_match_in_table_order_wins() {
        // Contains both "cafe" (Food) and "internet" (Utilities); the food
        // block precedes the utilities block, so the earlier keyword wins.
        assert_eq!(guess_category("Internet Cafe"), Category::Food);
    }

    #[test]
    fn test_no_match_and_empty() {
        assert_eq!(guess_category("Unknown Vendor LLC"), Category::Other);
        assert_eq!(guess_category(""), Category::Other);
        assert_eq!(guess_category("   "), Category::Other);
    }
}
