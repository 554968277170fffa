//! Sales fixtures for pipeline tests

use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "id,date,price,bedrooms,bathrooms,sqft_living,sqft_lot,floors,waterfront,view,condition,grade,sqft_above,sqft_basement,yr_built,yr_renovated,zipcode,lat,long,sqft_living15,sqft_lot15";

/// One zipcode with conditions 5, 4 and 3 and prices per area of 100,
/// 300 and 500. The second sale of id 1 is a later duplicate and id 5 has
/// no complete bathroom.
pub const NEIGHBOURHOOD: &[&str] = &[
    "1,2014-05-02,100000,3,1,1000,5000,1,0,0,5,7,1000,0,1980,0,98001,47.3,-122.2,1000,5000",
    "2,2014-06-10,300000,33,2.25,1000,5000,1.5,0,0,4,8,1000,0,1990,2005,98001,47.31,-122.21,1000,5000",
    "3,2014-07-15,500000,4,2,1000,5000,2,1,4,3,11,1000,0,2000,0,98001,47.32,-122.22,1000,5000",
    "1,2015-01-10,999999,3,1,1000,5000,1,0,0,5,7,1000,0,1980,0,98001,47.3,-122.2,1000,5000",
    "5,2014-08-01,900000,2,0.5,1000,5000,1,0,0,1,5,1000,0,1950,0,98001,47.33,-122.23,1000,5000",
];

/// Write `rows` under the standard header into a temp CSV file
pub fn sales_file(rows: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    writeln!(file, "{}", HEADER).expect("write header");
    for row in rows {
        writeln!(file, "{}", row).expect("write row");
    }
    file
}
