/// A catalog entry offered as a suggestion in the symbol picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedSymbol {
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Major NSE tickers offered as suggestions.
pub const LISTED_SYMBOLS: &[ListedSymbol] = &[
    ListedSymbol { symbol: "RELIANCE", name: "Reliance Industries Ltd." },
    ListedSymbol { symbol: "TCS", name: "Tata Consultancy Services Ltd." },
    ListedSymbol { symbol: "HDFCBANK", name: "HDFC Bank Ltd." },
    ListedSymbol { symbol: "INFY", name: "Infosys Ltd." },
    ListedSymbol { symbol: "HINDUNILVR", name: "Hindustan Unilever Ltd." },
    ListedSymbol { symbol: "ICICIBANK", name: "ICICI Bank Ltd." },
    ListedSymbol { symbol: "SBIN", name: "State Bank of India" },
    ListedSymbol { symbol: "BHARTIARTL", name: "Bharti Airtel Ltd." },
    ListedSymbol { symbol: "ITC", name: "ITC Ltd." },
    ListedSymbol { symbol: "KOTAKBANK", name: "Kotak Mahindra Bank Ltd." },
];

/// Filter the catalog by a case-insensitive substring match against
/// symbol or company name. An empty query returns the whole catalog.
#[must_use]
pub fn search(query: &str) -> Vec<&'static ListedSymbol> {
    let q = query.trim().to_lowercase();
    LISTED_SYMBOLS
        .iter()
        .filter(|s| {
            s.symbol.to_lowercase().contains(&q) || s.name.to_lowercase().contains(&q)
        })
        .collect()
}
