//! Catalog seed data and startup population.

use tracing::info;

use crate::db::catalog::CompanyStore;
use crate::error::ApiError;
use crate::models::{Company, Exchange};

/// The fixed company catalog: 30 BSE listings and their NSE counterparts.
const SEED_COMPANIES: &[(&str, &str, Exchange)] = &[
    ("RELIANCE.BO", "Reliance Industries", Exchange::Bse),
    ("TCS.BO", "Tata Consultancy Services", Exchange::Bse),
    ("HDFCBANK.BO", "HDFC Bank", Exchange::Bse),
    ("ICICIBANK.BO", "ICICI Bank", Exchange::Bse),
    ("HINDUNILVR.BO", "Hindustan Unilever", Exchange::Bse),
    ("INFY.BO", "Infosys", Exchange::Bse),
    ("ITC.BO", "ITC", Exchange::Bse),
    ("KOTAKBANK.BO", "Kotak Mahindra Bank", Exchange::Bse),
    ("AXISBANK.BO", "Axis Bank", Exchange::Bse),
    ("LT.BO", "Larsen & Toubro", Exchange::Bse),
    ("SBIN.BO", "State Bank of India", Exchange::Bse),
    ("BAJFINANCE.BO", "Bajaj Finance", Exchange::Bse),
    ("BHARTIARTL.BO", "Bharti Airtel", Exchange::Bse),
    ("ASIANPAINT.BO", "Asian Paints", Exchange::Bse),
    ("HCLTECH.BO", "HCL Technologies", Exchange::Bse),
    ("MARUTI.BO", "Maruti Suzuki", Exchange::Bse),
    ("TITAN.BO", "Titan Company", Exchange::Bse),
    ("ULTRACEMCO.BO", "UltraTech Cement", Exchange::Bse),
    ("SUNPHARMA.BO", "Sun Pharmaceutical", Exchange::Bse),
    ("NESTLEIND.BO", "Nestle India", Exchange::Bse),
    ("ONGC.BO", "Oil & Natural Gas Corp", Exchange::Bse),
    ("POWERGRID.BO", "Power Grid Corp", Exchange::Bse),
    ("NTPC.BO", "NTPC", Exchange::Bse),
    ("INDUSINDBK.BO", "IndusInd Bank", Exchange::Bse),
    ("BAJAJ-AUTO.BO", "Bajaj Auto", Exchange::Bse),
    ("TATAMOTORS.BO", "Tata Motors", Exchange::Bse),
    ("ADANIENT.BO", "Adani Enterprises", Exchange::Bse),
    ("JSWSTEEL.BO", "JSW Steel", Exchange::Bse),
    ("WIPRO.BO", "Wipro", Exchange::Bse),
    ("DRREDDY.BO", "Dr. Reddy's Labs", Exchange::Bse),
    ("RELIANCE.NS", "Reliance Industries", Exchange::Nse),
    ("TCS.NS", "Tata Consultancy Services", Exchange::Nse),
    ("HDFCBANK.NS", "HDFC Bank", Exchange::Nse),
    ("ICICIBANK.NS", "ICICI Bank", Exchange::Nse),
    ("HINDUNILVR.NS", "Hindustan Unilever", Exchange::Nse),
    ("INFY.NS", "Infosys", Exchange::Nse),
    ("ITC.NS", "ITC", Exchange::Nse),
    ("KOTAKBANK.NS", "Kotak Mahindra Bank", Exchange::Nse),
    ("AXISBANK.NS", "Axis Bank", Exchange::Nse),
    ("LT.NS", "Larsen & Toubro", Exchange::Nse),
    ("SBIN.NS", "State Bank of India", Exchange::Nse),
    ("BAJFINANCE.NS", "Bajaj Finance", Exchange::Nse),
    ("BHARTIARTL.NS", "Bharti Airtel", Exchange::Nse),
    ("ASIANPAINT.NS", "Asian Paints", Exchange::Nse),
    ("HCLTECH.NS", "HCL Technologies", Exchange::Nse),
    ("MARUTI.NS", "Maruti Suzuki", Exchange::Nse),
    ("TITAN.NS", "Titan Company", Exchange::Nse),
    ("ULTRACEMCO.NS", "UltraTech Cement", Exchange::Nse),
    ("SUNPHARMA.NS", "Sun Pharmaceutical", Exchange::Nse),
    ("NESTLEIND.NS", "Nestle India", Exchange::Nse),
    ("ONGC.NS", "Oil & Natural Gas Corp", Exchange::Nse),
    ("POWERGRID.NS", "Power Grid Corp", Exchange::Nse),
    ("NTPC.NS", "NTPC", Exchange::Nse),
    ("INDUSINDBK.NS", "IndusInd Bank", Exchange::Nse),
    ("BAJAJ-AUTO.NS", "Bajaj Auto", Exchange::Nse),
    ("TATAMOTORS.NS", "Tata Motors", Exchange::Nse),
    ("ADANIENT.NS", "Adani Enterprises", Exchange::Nse),
    ("JSWSTEEL.NS", "JSW Steel", Exchange::Nse),
    ("WIPRO.NS", "Wipro", Exchange::Nse),
    ("DRREDDY.NS", "Dr. Reddy's Labs", Exchange::Nse),
];

/// Seed the catalog with the fixed company list. Safe to run on every
/// startup: existing symbols are left untouched, so the catalog holds
/// exactly one row per seed entry no matter how often this runs.
pub fn initialize(store: &dyn CompanyStore) -> Result<(), ApiError> {
    let mut inserted = 0;
    for (symbol, name, exchange) in SEED_COMPANIES {
        if store.insert_if_absent(&Company::new(symbol, name, *exchange))? {
            inserted += 1;
        }
    }

    info!(
        inserted = inserted,
        total = SEED_COMPANIES.len(),
        "Catalog: seeded company list"
    );
    Ok(())
}
