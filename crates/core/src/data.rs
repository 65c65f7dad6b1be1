//! Built-in reference data: sovereign states and their capitals.
//!
//! Entries with `None` have no official capital and are filtered out when the
//! dataset is built.

use crate::model::{Dataset, RawCountry};

const WORLD: &[(&str, Option<&str>)] = &[
    ("Afghanistan", Some("Kabul")),
    ("Albania", Some("Tirana")),
    ("Algeria", Some("Algiers")),
    ("Andorra", Some("Andorra la Vella")),
    ("Angola", Some("Luanda")),
    ("Argentina", Some("Buenos Aires")),
    ("Armenia", Some("Yerevan")),
    ("Australia", Some("Canberra")),
    ("Austria", Some("Vienna")),
    ("Azerbaijan", Some("Baku")),
    ("Bahamas", Some("Nassau")),
    ("Bahrain", Some("Manama")),
    ("Bangladesh", Some("Dhaka")),
    ("Barbados", Some("Bridgetown")),
    ("Belarus", Some("Minsk")),
    ("Belgium", Some("Brussels")),
    ("Belize", Some("Belmopan")),
    ("Benin", Some("Porto-Novo")),
    ("Bhutan", Some("Thimphu")),
    ("Bolivia", Some("Sucre")),
    ("Bosnia and Herzegovina", Some("Sarajevo")),
    ("Botswana", Some("Gaborone")),
    ("Brazil", Some("Brasília")),
    ("Brunei", Some("Bandar Seri Begawan")),
    ("Bulgaria", Some("Sofia")),
    ("Burkina Faso", Some("Ouagadougou")),
    ("Burundi", Some("Gitega")),
    ("Cambodia", Some("Phnom Penh")),
    ("Cameroon", Some("Yaoundé")),
    ("Canada", Some("Ottawa")),
    ("Cape Verde", Some("Praia")),
    ("Central African Republic", Some("Bangui")),
    ("Chad", Some("N'Djamena")),
    ("Chile", Some("Santiago")),
    ("China", Some("Beijing")),
    ("Colombia", Some("Bogotá")),
    ("Comoros", Some("Moroni")),
    ("Costa Rica", Some("San José")),
    ("Croatia", Some("Zagreb")),
    ("Cuba", Some("Havana")),
    ("Cyprus", Some("Nicosia")),
    ("Czech Republic", Some("Prague")),
    ("Democratic Republic of the Congo", Some("Kinshasa")),
    ("Denmark", Some("Copenhagen")),
    ("Djibouti", Some("Djibouti")),
    ("Dominica", Some("Roseau")),
    ("Dominican Republic", Some("Santo Domingo")),
    ("Ecuador", Some("Quito")),
    ("Egypt", Some("Cairo")),
    ("El Salvador", Some("San Salvador")),
    ("Equatorial Guinea", Some("Malabo")),
    ("Eritrea", Some("Asmara")),
    ("Estonia", Some("Tallinn")),
    ("Eswatini", Some("Mbabane")),
    ("Ethiopia", Some("Addis Ababa")),
    ("Fiji", Some("Suva")),
    ("Finland", Some("Helsinki")),
    ("France", Some("Paris")),
    ("Gabon", Some("Libreville")),
    ("Gambia", Some("Banjul")),
    ("Georgia", Some("Tbilisi")),
    ("Germany", Some("Berlin")),
    ("Ghana", Some("Accra")),
    ("Greece", Some("Athens")),
    ("Grenada", Some("St. George's")),
    ("Guatemala", Some("Guatemala City")),
    ("Guinea", Some("Conakry")),
    ("Guinea-Bissau", Some("Bissau")),
    ("Guyana", Some("Georgetown")),
    ("Haiti", Some("Port-au-Prince")),
    ("Honduras", Some("Tegucigalpa")),
    ("Hungary", Some("Budapest")),
    ("Iceland", Some("Reykjavík")),
    ("India", Some("New Delhi")),
    ("Indonesia", Some("Jakarta")),
    ("Iran", Some("Tehran")),
    ("Iraq", Some("Baghdad")),
    ("Ireland", Some("Dublin")),
    ("Italy", Some("Rome")),
    ("Ivory Coast", Some("Yamoussoukro")),
    ("Jamaica", Some("Kingston")),
    ("Japan", Some("Tokyo")),
    ("Jordan", Some("Amman")),
    ("Kazakhstan", Some("Astana")),
    ("Kenya", Some("Nairobi")),
    ("Kiribati", Some("South Tarawa")),
    ("Kuwait", Some("Kuwait City")),
    ("Kyrgyzstan", Some("Bishkek")),
    ("Laos", Some("Vientiane")),
    ("Latvia", Some("Riga")),
    ("Lebanon", Some("Beirut")),
    ("Lesotho", Some("Maseru")),
    ("Liberia", Some("Monrovia")),
    ("Libya", Some("Tripoli")),
    ("Liechtenstein", Some("Vaduz")),
    ("Lithuania", Some("Vilnius")),
    ("Luxembourg", Some("Luxembourg")),
    ("Madagascar", Some("Antananarivo")),
    ("Malawi", Some("Lilongwe")),
    ("Malaysia", Some("Kuala Lumpur")),
    ("Maldives", Some("Malé")),
    ("Mali", Some("Bamako")),
    ("Malta", Some("Valletta")),
    ("Marshall Islands", Some("Majuro")),
    ("Mauritania", Some("Nouakchott")),
    ("Mauritius", Some("Port Louis")),
    ("Mexico", Some("Mexico City")),
    ("Micronesia", Some("Palikir")),
    ("Moldova", Some("Chișinău")),
    ("Monaco", Some("Monaco")),
    ("Mongolia", Some("Ulaanbaatar")),
    ("Montenegro", Some("Podgorica")),
    ("Morocco", Some("Rabat")),
    ("Mozambique", Some("Maputo")),
    ("Myanmar", Some("Naypyidaw")),
    ("Namibia", Some("Windhoek")),
    ("Nauru", None),
    ("Nepal", Some("Kathmandu")),
    ("Netherlands", Some("Amsterdam")),
    ("New Zealand", Some("Wellington")),
    ("Nicaragua", Some("Managua")),
    ("Niger", Some("Niamey")),
    ("Nigeria", Some("Abuja")),
    ("North Korea", Some("Pyongyang")),
    ("North Macedonia", Some("Skopje")),
    ("Norway", Some("Oslo")),
    ("Oman", Some("Muscat")),
    ("Pakistan", Some("Islamabad")),
    ("Palau", Some("Ngerulmud")),
    ("Panama", Some("Panama City")),
    ("Papua New Guinea", Some("Port Moresby")),
    ("Paraguay", Some("Asunción")),
    ("Peru", Some("Lima")),
    ("Philippines", Some("Manila")),
    ("Poland", Some("Warsaw")),
    ("Portugal", Some("Lisbon")),
    ("Qatar", Some("Doha")),
    ("Republic of the Congo", Some("Brazzaville")),
    ("Romania", Some("Bucharest")),
    ("Russia", Some("Moscow")),
    ("Rwanda", Some("Kigali")),
    ("Saint Kitts and Nevis", Some("Basseterre")),
    ("Saint Lucia", Some("Castries")),
    ("Saint Vincent and the Grenadines", Some("Kingstown")),
    ("Samoa", Some("Apia")),
    ("San Marino", Some("San Marino")),
    ("São Tomé and Príncipe", Some("São Tomé")),
    ("Saudi Arabia", Some("Riyadh")),
    ("Senegal", Some("Dakar")),
    ("Serbia", Some("Belgrade")),
    ("Seychelles", Some("Victoria")),
    ("Sierra Leone", Some("Freetown")),
    ("Singapore", Some("Singapore")),
    ("Slovakia", Some("Bratislava")),
    ("Slovenia", Some("Ljubljana")),
    ("Solomon Islands", Some("Honiara")),
    ("Somalia", Some("Mogadishu")),
    ("South Africa", Some("Pretoria")),
    ("South Korea", Some("Seoul")),
    ("South Sudan", Some("Juba")),
    ("Spain", Some("Madrid")),
    ("Sri Lanka", Some("Sri Jayawardenepura Kotte")),
    ("Sudan", Some("Khartoum")),
    ("Suriname", Some("Paramaribo")),
    ("Sweden", Some("Stockholm")),
    ("Switzerland", Some("Bern")),
    ("Syria", Some("Damascus")),
    ("Tajikistan", Some("Dushanbe")),
    ("Tanzania", Some("Dodoma")),
    ("Thailand", Some("Bangkok")),
    ("Timor-Leste", Some("Dili")),
    ("Togo", Some("Lomé")),
    ("Tonga", Some("Nukuʻalofa")),
    ("Trinidad and Tobago", Some("Port of Spain")),
    ("Tunisia", Some("Tunis")),
    ("Turkey", Some("Ankara")),
    ("Turkmenistan", Some("Ashgabat")),
    ("Tuvalu", Some("Funafuti")),
    ("Uganda", Some("Kampala")),
    ("Ukraine", Some("Kyiv")),
    ("United Arab Emirates", Some("Abu Dhabi")),
    ("United Kingdom", Some("London")),
    ("United States", Some("Washington, D.C.")),
    ("Uruguay", Some("Montevideo")),
    ("Uzbekistan", Some("Tashkent")),
    ("Vanuatu", Some("Port Vila")),
    ("Vatican City", Some("Vatican City")),
    ("Venezuela", Some("Caracas")),
    ("Vietnam", Some("Hanoi")),
    ("Yemen", Some("Sanaa")),
    ("Zambia", Some("Lusaka")),
    ("Zimbabwe", Some("Harare")),
];

/// The built-in world dataset, in alphabetical order.
#[must_use]
pub fn world() -> Dataset {
    Dataset::from_raw(
        WORLD
            .iter()
            .map(|(country, capital)| RawCountry::new(*country, *capital)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn countries_without_capital_are_excluded() {
        let data = world();
        assert!(!data.contains("Nauru"));
        assert_eq!(data.len(), WORLD.len() - 1);
    }

    #[test]
    fn capitals_are_unique() {
        let data = world();
        let capitals: HashSet<&str> = data.records().iter().map(|r| r.capital()).collect();
        assert_eq!(capitals.len(), data.len());
    }
}
