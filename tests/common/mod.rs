#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const LITERACY_CSV: &str = "\
Country Name,Country Code,2015,2016,Indicator Name,Indicator Code
Japan,JPN,99.0,99.1,Literacy rate,SE.ADT.LITR.FE.ZS
Brazil,BRA,92.3,,Literacy rate,SE.ADT.LITR.FE.ZS
Canada,CAN,98.5,98.7,Literacy rate,SE.ADT.LITR.FE.ZS
Chad,TCD,..,14.0,Literacy rate,SE.ADT.LITR.FE.ZS
Australia,AUS,97.2,97.4,Literacy rate,SE.ADT.LITR.FE.ZS
";

pub const GDP_CSV: &str = "\
Country Name,Country Code,2015,2016,Indicator Name,Indicator Code
Canada,CAN,-0.2,0.2,GDP per capita growth,NY.GDP.PCAP.KD.ZG
Australia,AUS,1.0,1.2,GDP per capita growth,NY.GDP.PCAP.KD.ZG
Brazil,BRA,-4.4,-4.1,GDP per capita growth,NY.GDP.PCAP.KD.ZG
Japan,JPN,1.6,0.8,GDP per capita growth,NY.GDP.PCAP.KD.ZG
";

pub const FERTILITY_CSV: &str = "\
id,Country,2015,2016,extra1,extra2
1,Japan,4.1,3.9,x,y
2,Chad,,160.2,x,y
3,Brazil,68.4,65.1,x,y
";

pub fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

/// A data directory holding all three indicator files.
pub fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "literacy.csv", LITERACY_CSV);
    write(dir.path(), "GDP per person.csv", GDP_CSV);
    write(dir.path(), "pregrant.csv", FERTILITY_CSV);
    dir
}
