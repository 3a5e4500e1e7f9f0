//! Hand-maintained ISO 3166-1 table.
//!
//! Includes codes that are not part of the standard but are used by map feeds
//! and visa providers (Kosovo `XK`/`XKX`).

use crate::codes::CountryRecord;

pub(crate) const COUNTRY_TABLE: &[CountryRecord] = &[
    CountryRecord::new("AF", "AFG", Some("004"), "Afghanistan", "أفغانستان"),
    CountryRecord::new("AX", "ALA", Some("248"), "Åland Islands", "جزر أولاند"),
    CountryRecord::new("AL", "ALB", Some("008"), "Albania", "ألبانيا"),
    CountryRecord::new("DZ", "DZA", Some("012"), "Algeria", "الجزائر"),
    CountryRecord::new("AS", "ASM", Some("016"), "American Samoa", "ساموا الأمريكية"),
    CountryRecord::new("AD", "AND", Some("020"), "Andorra", "أندورا"),
    CountryRecord::new("AO", "AGO", Some("024"), "Angola", "أنغولا"),
    CountryRecord::new("AI", "AIA", Some("660"), "Anguilla", "أنغويلا"),
    CountryRecord::new("AQ", "ATA", Some("010"), "Antarctica", "القارة القطبية الجنوبية"),
    CountryRecord::new("AG", "ATG", Some("028"), "Antigua and Barbuda", "أنتيغوا وباربودا"),
    CountryRecord::new("AR", "ARG", Some("032"), "Argentina", "الأرجنتين"),
    CountryRecord::new("AM", "ARM", Some("051"), "Armenia", "أرمينيا"),
    CountryRecord::new("AW", "ABW", Some("533"), "Aruba", "أروبا"),
    CountryRecord::new("AU", "AUS", Some("036"), "Australia", "أستراليا"),
    CountryRecord::new("AT", "AUT", Some("040"), "Austria", "النمسا"),
    CountryRecord::new("AZ", "AZE", Some("031"), "Azerbaijan", "أذربيجان"),
    CountryRecord::new("BS", "BHS", Some("044"), "Bahamas", "جزر البهاما"),
    CountryRecord::new("BH", "BHR", Some("048"), "Bahrain", "البحرين"),
    CountryRecord::new("BD", "BGD", Some("050"), "Bangladesh", "بنغلاديش"),
    CountryRecord::new("BB", "BRB", Some("052"), "Barbados", "باربادوس"),
    CountryRecord::new("BY", "BLR", Some("112"), "Belarus", "بيلاروس"),
    CountryRecord::new("BE", "BEL", Some("056"), "Belgium", "بلجيكا"),
    CountryRecord::new("BZ", "BLZ", Some("084"), "Belize", "بليز"),
    CountryRecord::new("BJ", "BEN", Some("204"), "Benin", "بنين"),
    CountryRecord::new("BM", "BMU", Some("060"), "Bermuda", "برمودا"),
    CountryRecord::new("BT", "BTN", Some("064"), "Bhutan", "بوتان"),
    CountryRecord::new("BO", "BOL", Some("068"), "Bolivia", "بوليفيا"),
    CountryRecord::new("BQ", "BES", Some("535"), "Caribbean Netherlands", "الجزر الكاريبية الهولندية"),
    CountryRecord::new("BA", "BIH", Some("070"), "Bosnia and Herzegovina", "البوسنة والهرسك"),
    CountryRecord::new("BW", "BWA", Some("072"), "Botswana", "بوتسوانا"),
    CountryRecord::new("BV", "BVT", Some("074"), "Bouvet Island", "جزيرة بوفيه"),
    CountryRecord::new("BR", "BRA", Some("076"), "Brazil", "البرازيل"),
    CountryRecord::new("IO", "IOT", Some("086"), "British Indian Ocean Territory", "إقليم المحيط الهندي البريطاني"),
    CountryRecord::new("BN", "BRN", Some("096"), "Brunei", "بروناي"),
    CountryRecord::new("BG", "BGR", Some("100"), "Bulgaria", "بلغاريا"),
    CountryRecord::new("BF", "BFA", Some("854"), "Burkina Faso", "بوركينا فاسو"),
    CountryRecord::new("BI", "BDI", Some("108"), "Burundi", "بوروندي"),
    CountryRecord::new("CV", "CPV", Some("132"), "Cape Verde", "الرأس الأخضر"),
    CountryRecord::new("KH", "KHM", Some("116"), "Cambodia", "كمبوديا"),
    CountryRecord::new("CM", "CMR", Some("120"), "Cameroon", "الكاميرون"),
    CountryRecord::new("CA", "CAN", Some("124"), "Canada", "كندا"),
    CountryRecord::new("KY", "CYM", Some("136"), "Cayman Islands", "جزر كايمان"),
    CountryRecord::new("CF", "CAF", Some("140"), "Central African Republic", "جمهورية أفريقيا الوسطى"),
    CountryRecord::new("TD", "TCD", Some("148"), "Chad", "تشاد"),
    CountryRecord::new("CL", "CHL", Some("152"), "Chile", "تشيلي"),
    CountryRecord::new("CN", "CHN", Some("156"), "China", "الصين"),
    CountryRecord::new("CX", "CXR", Some("162"), "Christmas Island", "جزيرة كريسماس"),
    CountryRecord::new("CC", "CCK", Some("166"), "Cocos (Keeling) Islands", "جزر كوكوس"),
    CountryRecord::new("CO", "COL", Some("170"), "Colombia", "كولومبيا"),
    CountryRecord::new("KM", "COM", Some("174"), "Comoros", "جزر القمر"),
    CountryRecord::new("CG", "COG", Some("178"), "Republic of the Congo", "جمهورية الكونغو"),
    CountryRecord::new("CD", "COD", Some("180"), "DR Congo", "جمهورية الكونغو الديمقراطية"),
    CountryRecord::new("CK", "COK", Some("184"), "Cook Islands", "جزر كوك"),
    CountryRecord::new("CR", "CRI", Some("188"), "Costa Rica", "كوستاريكا"),
    CountryRecord::new("CI", "CIV", Some("384"), "Côte d'Ivoire", "ساحل العاج"),
    CountryRecord::new("HR", "HRV", Some("191"), "Croatia", "كرواتيا"),
    CountryRecord::new("CU", "CUB", Some("192"), "Cuba", "كوبا"),
    CountryRecord::new("CW", "CUW", Some("531"), "Curaçao", "كوراساو"),
    CountryRecord::new("CY", "CYP", Some("196"), "Cyprus", "قبرص"),
    CountryRecord::new("CZ", "CZE", Some("203"), "Czechia", "التشيك"),
    CountryRecord::new("DK", "DNK", Some("208"), "Denmark", "الدنمارك"),
    CountryRecord::new("DJ", "DJI", Some("262"), "Djibouti", "جيبوتي"),
    CountryRecord::new("DM", "DMA", Some("212"), "Dominica", "دومينيكا"),
    CountryRecord::new("DO", "DOM", Some("214"), "Dominican Republic", "جمهورية الدومينيكان"),
    CountryRecord::new("EC", "ECU", Some("218"), "Ecuador", "الإكوادور"),
    CountryRecord::new("EG", "EGY", Some("818"), "Egypt", "مصر"),
    CountryRecord::new("SV", "SLV", Some("222"), "El Salvador", "السلفادور"),
    CountryRecord::new("GQ", "GNQ", Some("226"), "Equatorial Guinea", "غينيا الاستوائية"),
    CountryRecord::new("ER", "ERI", Some("232"), "Eritrea", "إريتريا"),
    CountryRecord::new("EE", "EST", Some("233"), "Estonia", "إستونيا"),
    CountryRecord::new("SZ", "SWZ", Some("748"), "Eswatini", "إسواتيني"),
    CountryRecord::new("ET", "ETH", Some("231"), "Ethiopia", "إثيوبيا"),
    CountryRecord::new("FK", "FLK", Some("238"), "Falkland Islands", "جزر فوكلاند"),
    CountryRecord::new("FO", "FRO", Some("234"), "Faroe Islands", "جزر فارو"),
    CountryRecord::new("FJ", "FJI", Some("242"), "Fiji", "فيجي"),
    CountryRecord::new("FI", "FIN", Some("246"), "Finland", "فنلندا"),
    CountryRecord::new("FR", "FRA", Some("250"), "France", "فرنسا"),
    CountryRecord::new("GF", "GUF", Some("254"), "French Guiana", "غويانا الفرنسية"),
    CountryRecord::new("PF", "PYF", Some("258"), "French Polynesia", "بولينزيا الفرنسية"),
    CountryRecord::new("TF", "ATF", Some("260"), "French Southern Territories", "الأقاليم الجنوبية الفرنسية"),
    CountryRecord::new("GA", "GAB", Some("266"), "Gabon", "الغابون"),
    CountryRecord::new("GM", "GMB", Some("270"), "Gambia", "غامبيا"),
    CountryRecord::new("GE", "GEO", Some("268"), "Georgia", "جورجيا"),
    CountryRecord::new("DE", "DEU", Some("276"), "Germany", "ألمانيا"),
    CountryRecord::new("GH", "GHA", Some("288"), "Ghana", "غانا"),
    CountryRecord::new("GI", "GIB", Some("292"), "Gibraltar", "جبل طارق"),
    CountryRecord::new("GR", "GRC", Some("300"), "Greece", "اليونان"),
    CountryRecord::new("GL", "GRL", Some("304"), "Greenland", "غرينلاند"),
    CountryRecord::new("GD", "GRD", Some("308"), "Grenada", "غرينادا"),
    CountryRecord::new("GP", "GLP", Some("312"), "Guadeloupe", "غوادلوب"),
    CountryRecord::new("GU", "GUM", Some("316"), "Guam", "غوام"),
    CountryRecord::new("GT", "GTM", Some("320"), "Guatemala", "غواتيمالا"),
    CountryRecord::new("GG", "GGY", Some("831"), "Guernsey", "غيرنزي"),
    CountryRecord::new("GN", "GIN", Some("324"), "Guinea", "غينيا"),
    CountryRecord::new("GW", "GNB", Some("624"), "Guinea-Bissau", "غينيا بيساو"),
    CountryRecord::new("GY", "GUY", Some("328"), "Guyana", "غيانا"),
    CountryRecord::new("HT", "HTI", Some("332"), "Haiti", "هايتي"),
    CountryRecord::new("HM", "HMD", Some("334"), "Heard Island and McDonald Islands", "جزيرة هيرد وجزر ماكدونالد"),
    CountryRecord::new("VA", "VAT", Some("336"), "Vatican City", "الفاتيكان"),
    CountryRecord::new("HN", "HND", Some("340"), "Honduras", "هندوراس"),
    CountryRecord::new("HK", "HKG", Some("344"), "Hong Kong", "هونغ كونغ"),
    CountryRecord::new("HU", "HUN", Some("348"), "Hungary", "المجر"),
    CountryRecord::new("IS", "ISL", Some("352"), "Iceland", "آيسلندا"),
    CountryRecord::new("IN", "IND", Some("356"), "India", "الهند"),
    CountryRecord::new("ID", "IDN", Some("360"), "Indonesia", "إندونيسيا"),
    CountryRecord::new("IR", "IRN", Some("364"), "Iran", "إيران"),
    CountryRecord::new("IQ", "IRQ", Some("368"), "Iraq", "العراق"),
    CountryRecord::new("IE", "IRL", Some("372"), "Ireland", "أيرلندا"),
    CountryRecord::new("IM", "IMN", Some("833"), "Isle of Man", "جزيرة مان"),
    CountryRecord::new("IL", "ISR", Some("376"), "Israel", "إسرائيل"),
    CountryRecord::new("IT", "ITA", Some("380"), "Italy", "إيطاليا"),
    CountryRecord::new("JM", "JAM", Some("388"), "Jamaica", "جامايكا"),
    CountryRecord::new("JP", "JPN", Some("392"), "Japan", "اليابان"),
    CountryRecord::new("JE", "JEY", Some("832"), "Jersey", "جيرزي"),
    CountryRecord::new("JO", "JOR", Some("400"), "Jordan", "الأردن"),
    CountryRecord::new("KZ", "KAZ", Some("398"), "Kazakhstan", "كازاخستان"),
    CountryRecord::new("KE", "KEN", Some("404"), "Kenya", "كينيا"),
    CountryRecord::new("KI", "KIR", Some("296"), "Kiribati", "كيريباتي"),
    CountryRecord::new("KP", "PRK", Some("408"), "North Korea", "كوريا الشمالية"),
    CountryRecord::new("KR", "KOR", Some("410"), "South Korea", "كوريا الجنوبية"),
    CountryRecord::new("XK", "XKX", None, "Kosovo", "كوسوفو"),
    CountryRecord::new("KW", "KWT", Some("414"), "Kuwait", "الكويت"),
    CountryRecord::new("KG", "KGZ", Some("417"), "Kyrgyzstan", "قيرغيزستان"),
    CountryRecord::new("LA", "LAO", Some("418"), "Laos", "لاوس"),
    CountryRecord::new("LV", "LVA", Some("428"), "Latvia", "لاتفيا"),
    CountryRecord::new("LB", "LBN", Some("422"), "Lebanon", "لبنان"),
    CountryRecord::new("LS", "LSO", Some("426"), "Lesotho", "ليسوتو"),
    CountryRecord::new("LR", "LBR", Some("430"), "Liberia", "ليبيريا"),
    CountryRecord::new("LY", "LBY", Some("434"), "Libya", "ليبيا"),
    CountryRecord::new("LI", "LIE", Some("438"), "Liechtenstein", "ليختنشتاين"),
    CountryRecord::new("LT", "LTU", Some("440"), "Lithuania", "ليتوانيا"),
    CountryRecord::new("LU", "LUX", Some("442"), "Luxembourg", "لوكسمبورغ"),
    CountryRecord::new("MO", "MAC", Some("446"), "Macau", "ماكاو"),
    CountryRecord::new("MG", "MDG", Some("450"), "Madagascar", "مدغشقر"),
    CountryRecord::new("MW", "MWI", Some("454"), "Malawi", "ملاوي"),
    CountryRecord::new("MY", "MYS", Some("458"), "Malaysia", "ماليزيا"),
    CountryRecord::new("MV", "MDV", Some("462"), "Maldives", "جزر المالديف"),
    CountryRecord::new("ML", "MLI", Some("466"), "Mali", "مالي"),
    CountryRecord::new("MT", "MLT", Some("470"), "Malta", "مالطا"),
    CountryRecord::new("MH", "MHL", Some("584"), "Marshall Islands", "جزر مارشال"),
    CountryRecord::new("MQ", "MTQ", Some("474"), "Martinique", "مارتينيك"),
    CountryRecord::new("MR", "MRT", Some("478"), "Mauritania", "موريتانيا"),
    CountryRecord::new("MU", "MUS", Some("480"), "Mauritius", "موريشيوس"),
    CountryRecord::new("YT", "MYT", Some("175"), "Mayotte", "مايوت"),
    CountryRecord::new("MX", "MEX", Some("484"), "Mexico", "المكسيك"),
    CountryRecord::new("FM", "FSM", Some("583"), "Micronesia", "ميكرونيسيا"),
    CountryRecord::new("MD", "MDA", Some("498"), "Moldova", "مولدوفا"),
    CountryRecord::new("MC", "MCO", Some("492"), "Monaco", "موناكو"),
    CountryRecord::new("MN", "MNG", Some("496"), "Mongolia", "منغوليا"),
    CountryRecord::new("ME", "MNE", Some("499"), "Montenegro", "الجبل الأسود"),
    CountryRecord::new("MS", "MSR", Some("500"), "Montserrat", "مونتسرات"),
    CountryRecord::new("MA", "MAR", Some("504"), "Morocco", "المغرب"),
    CountryRecord::new("MZ", "MOZ", Some("508"), "Mozambique", "موزمبيق"),
    CountryRecord::new("MM", "MMR", Some("104"), "Myanmar", "ميانمار"),
    CountryRecord::new("NA", "NAM", Some("516"), "Namibia", "ناميبيا"),
    CountryRecord::new("NR", "NRU", Some("520"), "Nauru", "ناورو"),
    CountryRecord::new("NP", "NPL", Some("524"), "Nepal", "نيبال"),
    CountryRecord::new("NL", "NLD", Some("528"), "Netherlands", "هولندا"),
    CountryRecord::new("NC", "NCL", Some("540"), "New Caledonia", "كاليدونيا الجديدة"),
    CountryRecord::new("NZ", "NZL", Some("554"), "New Zealand", "نيوزيلندا"),
    CountryRecord::new("NI", "NIC", Some("558"), "Nicaragua", "نيكاراغوا"),
    CountryRecord::new("NE", "NER", Some("562"), "Niger", "النيجر"),
    CountryRecord::new("NG", "NGA", Some("566"), "Nigeria", "نيجيريا"),
    CountryRecord::new("NU", "NIU", Some("570"), "Niue", "نييوي"),
    CountryRecord::new("NF", "NFK", Some("574"), "Norfolk Island", "جزيرة نورفولك"),
    CountryRecord::new("MK", "MKD", Some("807"), "North Macedonia", "مقدونيا الشمالية"),
    CountryRecord::new("MP", "MNP", Some("580"), "Northern Mariana Islands", "جزر ماريانا الشمالية"),
    CountryRecord::new("NO", "NOR", Some("578"), "Norway", "النرويج"),
    CountryRecord::new("OM", "OMN", Some("512"), "Oman", "عمان"),
    CountryRecord::new("PK", "PAK", Some("586"), "Pakistan", "باكستان"),
    CountryRecord::new("PW", "PLW", Some("585"), "Palau", "بالاو"),
    CountryRecord::new("PS", "PSE", Some("275"), "Palestine", "فلسطين"),
    CountryRecord::new("PA", "PAN", Some("591"), "Panama", "بنما"),
    CountryRecord::new("PG", "PNG", Some("598"), "Papua New Guinea", "بابوا غينيا الجديدة"),
    CountryRecord::new("PY", "PRY", Some("600"), "Paraguay", "باراغواي"),
    CountryRecord::new("PE", "PER", Some("604"), "Peru", "بيرو"),
    CountryRecord::new("PH", "PHL", Some("608"), "Philippines", "الفلبين"),
    CountryRecord::new("PN", "PCN", Some("612"), "Pitcairn Islands", "جزر بيتكيرن"),
    CountryRecord::new("PL", "POL", Some("616"), "Poland", "بولندا"),
    CountryRecord::new("PT", "PRT", Some("620"), "Portugal", "البرتغال"),
    CountryRecord::new("PR", "PRI", Some("630"), "Puerto Rico", "بورتوريكو"),
    CountryRecord::new("QA", "QAT", Some("634"), "Qatar", "قطر"),
    CountryRecord::new("RE", "REU", Some("638"), "Réunion", "لا ريونيون"),
    CountryRecord::new("RO", "ROU", Some("642"), "Romania", "رومانيا"),
    CountryRecord::new("RU", "RUS", Some("643"), "Russia", "روسيا"),
    CountryRecord::new("RW", "RWA", Some("646"), "Rwanda", "رواندا"),
    CountryRecord::new("BL", "BLM", Some("652"), "Saint Barthélemy", "سان بارتيلمي"),
    CountryRecord::new("SH", "SHN", Some("654"), "Saint Helena", "سانت هيلينا"),
    CountryRecord::new("KN", "KNA", Some("659"), "Saint Kitts and Nevis", "سانت كيتس ونيفيس"),
    CountryRecord::new("LC", "LCA", Some("662"), "Saint Lucia", "سانت لوسيا"),
    CountryRecord::new("MF", "MAF", Some("663"), "Saint Martin", "سانت مارتن"),
    CountryRecord::new("PM", "SPM", Some("666"), "Saint Pierre and Miquelon", "سان بيير وميكلون"),
    CountryRecord::new("VC", "VCT", Some("670"), "Saint Vincent and the Grenadines", "سانت فنسنت والغرينادين"),
    CountryRecord::new("WS", "WSM", Some("882"), "Samoa", "ساموا"),
    CountryRecord::new("SM", "SMR", Some("674"), "San Marino", "سان مارينو"),
    CountryRecord::new("ST", "STP", Some("678"), "São Tomé and Príncipe", "ساو تومي وبرينسيب"),
    CountryRecord::new("SA", "SAU", Some("682"), "Saudi Arabia", "المملكة العربية السعودية"),
    CountryRecord::new("SN", "SEN", Some("686"), "Senegal", "السنغال"),
    CountryRecord::new("RS", "SRB", Some("688"), "Serbia", "صربيا"),
    CountryRecord::new("SC", "SYC", Some("690"), "Seychelles", "سيشل"),
    CountryRecord::new("SL", "SLE", Some("694"), "Sierra Leone", "سيراليون"),
    CountryRecord::new("SG", "SGP", Some("702"), "Singapore", "سنغافورة"),
    CountryRecord::new("SX", "SXM", Some("534"), "Sint Maarten", "سينت مارتن"),
    CountryRecord::new("SK", "SVK", Some("703"), "Slovakia", "سلوفاكيا"),
    CountryRecord::new("SI", "SVN", Some("705"), "Slovenia", "سلوفينيا"),
    CountryRecord::new("SB", "SLB", Some("090"), "Solomon Islands", "جزر سليمان"),
    CountryRecord::new("SO", "SOM", Some("706"), "Somalia", "الصومال"),
    CountryRecord::new("ZA", "ZAF", Some("710"), "South Africa", "جنوب أفريقيا"),
    CountryRecord::new("GS", "SGS", Some("239"), "South Georgia and the South Sandwich Islands", "جورجيا الجنوبية وجزر ساندويتش الجنوبية"),
    CountryRecord::new("SS", "SSD", Some("728"), "South Sudan", "جنوب السودان"),
    CountryRecord::new("ES", "ESP", Some("724"), "Spain", "إسبانيا"),
    CountryRecord::new("LK", "LKA", Some("144"), "Sri Lanka", "سريلانكا"),
    CountryRecord::new("SD", "SDN", Some("729"), "Sudan", "السودان"),
    CountryRecord::new("SR", "SUR", Some("740"), "Suriname", "سورينام"),
    CountryRecord::new("SJ", "SJM", Some("744"), "Svalbard and Jan Mayen", "سفالبارد ويان ماين"),
    CountryRecord::new("SE", "SWE", Some("752"), "Sweden", "السويد"),
    CountryRecord::new("CH", "CHE", Some("756"), "Switzerland", "سويسرا"),
    CountryRecord::new("SY", "SYR", Some("760"), "Syria", "سوريا"),
    CountryRecord::new("TW", "TWN", Some("158"), "Taiwan", "تايوان"),
    CountryRecord::new("TJ", "TJK", Some("762"), "Tajikistan", "طاجيكستان"),
    CountryRecord::new("TZ", "TZA", Some("834"), "Tanzania", "تنزانيا"),
    CountryRecord::new("TH", "THA", Some("764"), "Thailand", "تايلاند"),
    CountryRecord::new("TL", "TLS", Some("626"), "Timor-Leste", "تيمور الشرقية"),
    CountryRecord::new("TG", "TGO", Some("768"), "Togo", "توغو"),
    CountryRecord::new("TK", "TKL", Some("772"), "Tokelau", "توكيلاو"),
    CountryRecord::new("TO", "TON", Some("776"), "Tonga", "تونغا"),
    CountryRecord::new("TT", "TTO", Some("780"), "Trinidad and Tobago", "ترينيداد وتوباغو"),
    CountryRecord::new("TN", "TUN", Some("788"), "Tunisia", "تونس"),
    CountryRecord::new("TR", "TUR", Some("792"), "Turkey", "تركيا"),
    CountryRecord::new("TM", "TKM", Some("795"), "Turkmenistan", "تركمانستان"),
    CountryRecord::new("TC", "TCA", Some("796"), "Turks and Caicos Islands", "جزر توركس وكايكوس"),
    CountryRecord::new("TV", "TUV", Some("798"), "Tuvalu", "توفالو"),
    CountryRecord::new("UG", "UGA", Some("800"), "Uganda", "أوغندا"),
    CountryRecord::new("UA", "UKR", Some("804"), "Ukraine", "أوكرانيا"),
    CountryRecord::new("AE", "ARE", Some("784"), "United Arab Emirates", "الإمارات العربية المتحدة"),
    CountryRecord::new("GB", "GBR", Some("826"), "United Kingdom", "المملكة المتحدة"),
    CountryRecord::new("US", "USA", Some("840"), "United States", "الولايات المتحدة"),
    CountryRecord::new("UM", "UMI", Some("581"), "U.S. Minor Outlying Islands", "جزر الولايات المتحدة الصغيرة النائية"),
    CountryRecord::new("UY", "URY", Some("858"), "Uruguay", "الأوروغواي"),
    CountryRecord::new("UZ", "UZB", Some("860"), "Uzbekistan", "أوزبكستان"),
    CountryRecord::new("VU", "VUT", Some("548"), "Vanuatu", "فانواتو"),
    CountryRecord::new("VE", "VEN", Some("862"), "Venezuela", "فنزويلا"),
    CountryRecord::new("VN", "VNM", Some("704"), "Vietnam", "فيتنام"),
    CountryRecord::new("VG", "VGB", Some("092"), "British Virgin Islands", "جزر العذراء البريطانية"),
    CountryRecord::new("VI", "VIR", Some("850"), "U.S. Virgin Islands", "جزر العذراء الأمريكية"),
    CountryRecord::new("WF", "WLF", Some("876"), "Wallis and Futuna", "واليس وفوتونا"),
    CountryRecord::new("EH", "ESH", Some("732"), "Western Sahara", "الصحراء الغربية"),
    CountryRecord::new("YE", "YEM", Some("887"), "Yemen", "اليمن"),
    CountryRecord::new("ZM", "ZMB", Some("894"), "Zambia", "زامبيا"),
    CountryRecord::new("ZW", "ZWE", Some("716"), "Zimbabwe", "زيمبابوي"),
];
