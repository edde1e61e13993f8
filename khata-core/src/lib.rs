//! khata-core: record types, tenant-scoped storage, and categorization
//! for the khata transaction extraction pipeline.

pub mod store;
pub mod transaction;

pub use store::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, OrgStore, Page};
pub use transaction::{Category, ParsedTransaction, TransactionKind, TransactionRecord};

/// Utility for categorizing transaction descriptions
pub mod categorizer {
    use super::Category;

    /// Categorize a description using keyword matching.
    ///
    /// Deterministic, no model calls: lowercase the text and walk the
    /// keyword lists in priority order. Anything unrecognized is `Other`.
    pub fn categorize(description: &str) -> Category {
        let desc = description.to_lowercase();

        // Shopping / e-commerce
        if desc.contains("amazon")
            || desc.contains("flipkart")
            || desc.contains("myntra")
            || desc.contains("ajio")
            || desc.contains("croma")
            || desc.contains("mall")
            || desc.contains("shopping")
        {
            return Category::Shopping;
        }

        // Food & dining
        if desc.contains("swiggy")
            || desc.contains("zomato")
            || desc.contains("bigbasket")
            || desc.contains("blinkit")
            || desc.contains("zepto")
            || desc.contains("restaurant")
            || desc.contains("cafe")
            || desc.contains("coffee")
            || desc.contains("grocery")
            || desc.contains("dining")
            || desc.contains("food")
        {
            return Category::Food;
        }

        // Travel / transport
        if desc.contains("uber")
            || desc.contains("ola ")
            || desc.contains("rapido")
            || desc.contains("irctc")
            || desc.contains("makemytrip")
            || desc.contains("indigo")
            || desc.contains("airlines")
            || desc.contains("flight")
            || desc.contains("metro")
            || desc.contains("petrol")
            || desc.contains("fuel")
            || desc.contains("ride")
        {
            return Category::Travel;
        }

        // Entertainment / subscriptions
        if desc.contains("netflix")
            || desc.contains("spotify")
            || desc.contains("hotstar")
            || desc.contains("prime video")
            || desc.contains("bookmyshow")
            || desc.contains("pvr")
            || desc.contains("movie")
            || desc.contains("gaming")
        {
            return Category::Entertainment;
        }

        // Bills / recurring obligations
        if desc.contains("electricity")
            || desc.contains("recharge")
            || desc.contains("broadband")
            || desc.contains("airtel")
            || desc.contains("jio")
            || desc.contains("dth")
            || desc.contains("emi")
            || desc.contains("insurance")
            || desc.contains("rent")
            || desc.contains("maintenance")
            || desc.contains("bill")
        {
            return Category::Bills;
        }

        // Default
        Category::Other
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_categorize_shopping() {
            assert_eq!(categorize("Amazon.in Order"), Category::Shopping);
            assert_eq!(categorize("FLIPKART PAYMENTS"), Category::Shopping);
        }

        #[test]
        fn test_categorize_food() {
            assert_eq!(categorize("SWIGGY BANGALORE"), Category::Food);
            assert_eq!(categorize("STARBUCKS COFFEE MUMBAI"), Category::Food);
        }

        #[test]
        fn test_categorize_travel() {
            assert_eq!(categorize("Uber Ride Airport Drop"), Category::Travel);
            assert_eq!(categorize("IRCTC ticket"), Category::Travel);
        }

        #[test]
        fn test_categorize_entertainment() {
            assert_eq!(categorize("NETFLIX.COM subscription"), Category::Entertainment);
        }

        #[test]
        fn test_categorize_bills() {
            assert_eq!(categorize("BESCOM electricity payment"), Category::Bills);
            assert_eq!(categorize("Airtel recharge"), Category::Bills);
        }

        #[test]
        fn test_categorize_unknown_is_other() {
            assert_eq!(categorize("NEFT UTR 12345"), Category::Other);
            assert_eq!(categorize(""), Category::Other);
        }

        /// Priority check: "food" outranks "bill" when both keywords appear.
        #[test]
        fn test_categorize_priority_order() {
            assert_eq!(categorize("food court bill"), Category::Food);
        }
    }
}

pub use categorizer::categorize;
