//! Nintendo licensee / maker code lookup tables.
//!
//! Two tables live here:
//!
//! - **2-character codes**: Game Boy (new licensee at 0x0144 when the old
//!   code is 0x33, otherwise the old byte printed as two hex digits) and
//!   GBA (maker code at 0xB0).
//!
//! - **SNES company numbers**: the licensee byte split into nibbles, or the
//!   extended-header maker code decoded as a base-36 pair.

/// Look up a publisher name from a 2-character Game Boy / GBA code.
pub(crate) fn maker_code_name(code: &str) -> Option<&'static str> {
    match code {
        "01" => Some("Nintendo"),
        "02" => Some("Rocket Games"),
        "08" => Some("Capcom"),
        "09" => Some("Hot B Co."),
        "0A" => Some("Jaleco"),
        "0B" => Some("Coconuts Japan"),
        "0C" => Some("Coconuts Japan/G.X.Media"),
        "0H" => Some("Starfish"),
        "0L" => Some("Warashi Inc."),
        "0N" => Some("Nowpro"),
        "0P" => Some("Game Village"),
        "13" => Some("Electronic Arts Japan"),
        "18" => Some("Hudson Soft Japan"),
        "19" => Some("S.C.P."),
        "1A" => Some("Yonoman"),
        "1G" => Some("SMDE"),
        "1P" => Some("Creatures Inc."),
        "1Q" => Some("TDK Deep Impresion"),
        "20" => Some("Destination Software"),
        "22" => Some("VR 1 Japan"),
        "25" => Some("San-X"),
        "28" => Some("Kemco Japan"),
        "29" => Some("Seta"),
        "2H" => Some("Ubisoft Japan"),
        "2K" => Some("NEC InterChannel"),
        "2L" => Some("Tam"),
        "2M" => Some("Jordan"),
        "2N" => Some("Smilesoft"),
        "2Q" => Some("Mediakite"),
        "36" => Some("Codemasters"),
        "37" => Some("GAGA Communications"),
        "38" => Some("Laguna"),
        "39" => Some("Telstar Fun and Games"),
        "41" => Some("Ubi Soft Entertainment"),
        "42" => Some("Sunsoft"),
        "47" => Some("Spectrum Holobyte"),
        "49" => Some("IREM"),
        "4D" => Some("Malibu Games"),
        "4F" => Some("Eidos/U.S. Gold"),
        "4J" => Some("Fox Interactive"),
        "4K" => Some("Time Warner Interactive"),
        "4Q" => Some("Disney"),
        "4S" => Some("Black Pearl"),
        "4X" => Some("GT Interactive"),
        "4Y" => Some("RARE"),
        "4Z" => Some("Crave Entertainment"),
        "50" => Some("Absolute Entertainment"),
        "51" => Some("Acclaim"),
        "52" => Some("Activision"),
        "53" => Some("American Sammy Corp."),
        "54" => Some("Take 2 Interactive"),
        "55" => Some("Hi Tech"),
        "56" => Some("LJN LTD."),
        "58" => Some("Mattel"),
        "5A" => Some("Mindscape/Red Orb Ent."),
        "5C" => Some("Taxan"),
        "5D" => Some("Midway"),
        "5F" => Some("American Softworks"),
        "5G" => Some("Majesco Sales Inc"),
        "5H" => Some("3DO"),
        "5K" => Some("Hasbro"),
        "5L" => Some("NewKidCo"),
        "5M" => Some("Telegames"),
        "5N" => Some("Metro3D"),
        "5P" => Some("Vatical Entertainment"),
        "5Q" => Some("LEGO Media"),
        "5S" => Some("Xicat Interactive"),
        "5T" => Some("Cryo Interactive"),
        "5W" => Some("Red Storm Ent./BKN Ent."),
        "5X" => Some("Microids"),
        "5Z" => Some("Conspiracy Entertainment Corp."),
        "60" => Some("Titus Interactive Studios"),
        "61" => Some("Virgin Interactive"),
        "62" => Some("Maxis"),
        "64" => Some("LucasArts Entertainment"),
        "67" => Some("Ocean"),
        "69" => Some("Electronic Arts"),
        "6E" => Some("Elite Systems Ltd."),
        "6F" => Some("Electro Brain"),
        "6G" => Some("The Learning Company"),
        "6H" => Some("BBC"),
        "6J" => Some("Software 2000"),
        "6L" => Some("BAM! Entertainment"),
        "6M" => Some("Studio 3"),
        "6Q" => Some("Classified Games"),
        "6S" => Some("TDK Mediactive"),
        "6U" => Some("DreamCatcher"),
        "6V" => Some("JoWood Productions"),
        "6W" => Some("SEGA"),
        "6X" => Some("Wannado Edition"),
        "6Y" => Some("LSP"),
        "6Z" => Some("ITE Media"),
        "70" => Some("Infogrames"),
        "71" => Some("Interplay"),
        "72" => Some("JVC Musical Industries Inc"),
        "73" => Some("Parker Brothers"),
        "75" => Some("SCI"),
        "78" => Some("THQ"),
        "79" => Some("Accolade"),
        "7A" => Some("Triffix Ent. Inc."),
        "7C" => Some("Microprose Software"),
        "7D" => Some("Universal Interactive Studios"),
        "7F" => Some("Kemco"),
        "7G" => Some("Rage Software"),
        "7H" => Some("Encore"),
        "7J" => Some("Zoo"),
        "7K" => Some("BVM"),
        "7L" => Some("Simon & Schuster Interactive"),
        "7M" => Some("Asmik Ace Entertainment Inc./AIA"),
        "7N" => Some("Empire Interactive"),
        "7Q" => Some("Jester Interactive"),
        "7T" => Some("Scholastic"),
        "7U" => Some("Ignition Entertainment"),
        "7W" => Some("Stadlbauer"),
        "80" => Some("Misawa"),
        "83" => Some("LOZC"),
        "8B" => Some("Bulletproof Software"),
        "8C" => Some("Vic Tokai Inc."),
        "8J" => Some("General Entertainment"),
        "8N" => Some("Success"),
        "8P" => Some("SEGA Japan"),
        "91" => Some("Chun Soft"),
        "92" => Some("Video System"),
        "93" => Some("BEC"),
        "96" => Some("Yonezawa/S'pal"),
        "97" => Some("Kaneko"),
        "99" => Some("Victor Interactive Software"),
        "9A" => Some("Nichibutsu/Nihon Bussan"),
        "9B" => Some("Tecmo"),
        "9C" => Some("Imagineer"),
        "9F" => Some("Nova"),
        "9H" => Some("Bottom Up"),
        "9L" => Some("Hasbro Japan"),
        "9N" => Some("Marvelous Entertainment"),
        "9P" => Some("Keynet Inc."),
        "9Q" => Some("Hands-On Entertainment"),
        "A0" => Some("Telenet"),
        "A1" => Some("Hori"),
        "A4" => Some("Konami"),
        "A6" => Some("Kawada"),
        "A7" => Some("Takara"),
        "A9" => Some("Technos Japan Corp."),
        "AA" => Some("JVC"),
        "AC" => Some("Toei Animation"),
        "AD" => Some("Toho"),
        "AF" => Some("Namco"),
        "AG" => Some("Media Rings Corporation"),
        "AH" => Some("J-Wing"),
        "AK" => Some("KID"),
        "AL" => Some("MediaFactory"),
        "AP" => Some("Infogrames Hudson"),
        "AQ" => Some("Kiratto. Ludic Inc"),
        "B0" => Some("Acclaim Japan"),
        "B1" => Some("ASCII"),
        "B2" => Some("Bandai"),
        "B4" => Some("Enix"),
        "B6" => Some("HAL Laboratory"),
        "B7" => Some("SNK"),
        "B9" => Some("Pony Canyon Hanbai"),
        "BA" => Some("Culture Brain"),
        "BB" => Some("Sunsoft"),
        "BD" => Some("Sony Imagesoft"),
        "BF" => Some("Sammy"),
        "BG" => Some("Magical"),
        "BJ" => Some("Compile"),
        "BL" => Some("MTO Inc."),
        "BN" => Some("Sunrise Interactive"),
        "BP" => Some("Global A Entertainment"),
        "BQ" => Some("Fuuki"),
        "C0" => Some("Taito"),
        "C2" => Some("Kemco"),
        "C3" => Some("Square Soft"),
        "C5" => Some("Data East"),
        "C6" => Some("Tonkin House"),
        "C8" => Some("Koei"),
        "CA" => Some("Konami/Palcom/Ultra"),
        "CB" => Some("Vapinc/NTVIC"),
        "CC" => Some("Use Co.,Ltd."),
        "CD" => Some("Meldac"),
        "CE" => Some("FCI/Pony Canyon"),
        "CF" => Some("Angel"),
        "CM" => Some("Konami Computer Entertainment Osaka"),
        "CP" => Some("Enterbrain"),
        "D1" => Some("Sofel"),
        "D2" => Some("Quest"),
        "D3" => Some("Sigma Enterprises"),
        "D4" => Some("Ask Kodansa"),
        "D6" => Some("Naxat"),
        "D7" => Some("Copya System"),
        "D9" => Some("Banpresto"),
        "DA" => Some("TOMY"),
        "DB" => Some("LJN Japan"),
        "DD" => Some("NCS"),
        "DF" => Some("Altron Corporation"),
        "DH" => Some("Gaps Inc."),
        "DN" => Some("ELF"),
        "E2" => Some("Yutaka"),
        "E3" => Some("Varie"),
        "E5" => Some("Epoch"),
        "E7" => Some("Athena"),
        "E8" => Some("Asmik Ace Entertainment Inc."),
        "E9" => Some("Natsume"),
        "EA" => Some("King Records"),
        "EB" => Some("Atlus"),
        "EC" => Some("Epic/Sony Records"),
        "EE" => Some("IGS"),
        "EL" => Some("Spike"),
        "EM" => Some("Konami Computer Entertainment Tokyo"),
        "EN" => Some("Alphadream Corporation"),
        "F0" => Some("A Wave"),
        "G1" => Some("PCCW"),
        "G4" => Some("KiKi Co Ltd"),
        "G5" => Some("Open Sesame Inc."),
        "G6" => Some("Sims"),
        "G7" => Some("Broccoli"),
        "G8" => Some("Avex"),
        "G9" => Some("D3 Publisher"),
        "GB" => Some("Konami Computer Entertainment Japan"),
        "GD" => Some("Square-Enix"),
        "HY" => Some("Sachen"),
        _ => None,
    }
}

/// Look up an SNES publisher from its numeric company id.
pub(crate) fn snes_company_name(company: u16) -> Option<&'static str> {
    match company {
        0x0001 => Some("Nintendo"),
        0x0002 => Some("Rocket Games/Ajinomoto"),
        0x0003 => Some("Imagineer-Zoom"),
        0x0004 => Some("Gray Matter"),
        0x0005 => Some("Zamuse"),
        0x0006 => Some("Falcom"),
        0x0008 => Some("Capcom"),
        0x0009 => Some("Hot B Co."),
        0x000A => Some("Jaleco"),
        0x000B => Some("Coconuts Japan"),
        0x000C => Some("Coconuts Japan/G.X.Media"),
        0x000D => Some("Micronet"),
        0x000E => Some("Technos"),
        0x000F => Some("Mebio Software"),
        0x0010 => Some("Shouei System"),
        0x0011 => Some("Starfish"),
        0x0013 => Some("Mitsui Fudosan/Dentsu"),
        0x0015 => Some("Warashi Inc."),
        0x0017 => Some("Nowpro"),
        0x0019 => Some("Game Village"),
        0x001A => Some("IE Institute"),
        0x0024 => Some("Banarex"),
        0x0025 => Some("Starfish"),
        0x0026 => Some("Infocom"),
        0x0027 => Some("Electronic Arts Japan"),
        0x0029 => Some("Cobra Team"),
        0x002A => Some("Human/Field"),
        0x002B => Some("KOEI"),
        0x002C => Some("Hudson Soft"),
        0x002D => Some("S.C.P./Game Village"),
        0x002E => Some("Yanoman"),
        0x0030 => Some("Tecmo Products"),
        0x0031 => Some("Japan Glary Business"),
        0x0032 => Some("Forum/OpenSystem"),
        0x0033 => Some("Virgin Games (Japan)"),
        0x0034 => Some("SMDE"),
        0x0035 => Some("Yojigen"),
        0x0037 => Some("Daikokudenki"),
        0x003D => Some("Creatures Inc."),
        0x003E => Some("TDK Deep Impresion"),
        0x0048 => Some("Destination Software/KSS"),
        0x0049 => Some("Sunsoft/Tokai Engineering"),
        0x004A => Some("POW (Planning Office Wada)/VR 1 Japan"),
        0x004B => Some("Micro World"),
        0x004D => Some("San-X"),
        0x004E => Some("Enix"),
        0x004F => Some("Loriciel/Electro Brain"),
        0x0050 => Some("Kemco Japan"),
        0x0051 => Some("Seta Co.,Ltd."),
        0x0052 => Some("Culture Brain"),
        0x0053 => Some("Irem Corp."),
        0x0054 => Some("Palsoft"),
        0x0055 => Some("Visit Co., Ltd."),
        0x0056 => Some("Intec"),
        0x0057 => Some("System Sacom"),
        0x0058 => Some("Poppo"),
        0x0059 => Some("Ubisoft Japan"),
        0x005B => Some("Media Works"),
        0x005C => Some("NEC InterChannel"),
        0x005D => Some("Tam"),
        0x005E => Some("Gajin/Jordan"),
        0x005F => Some("Smilesoft"),
        0x0062 => Some("Mediakite"),
        0x006C => Some("Viacom"),
        0x006D => Some("Carrozzeria"),
        0x006E => Some("Dynamic"),
        0x0070 => Some("Magifact"),
        0x0071 => Some("Hect"),
        0x0072 => Some("Codemasters"),
        0x0073 => Some("Taito/GAGA Communications"),
        0x0074 => Some("Laguna"),
        0x0075 => Some("Telstar Fun & Games/Event/Taito"),
        0x0077 => Some("Arcade Zone Ltd."),
        0x0078 => Some("Entertainment International/Empire Software"),
        0x0079 => Some("Loriciel"),
        0x007A => Some("Gremlin Graphics"),
        0x0090 => Some("Seika Corp."),
        0x0091 => Some("UBI SOFT Entertainment Software"),
        0x0092 => Some("Sunsoft US"),
        0x0094 => Some("Life Fitness"),
        0x0096 => Some("System 3"),
        0x0097 => Some("Spectrum Holobyte"),
        0x0099 => Some("Irem"),
        0x009B => Some("Raya Systems"),
        0x009C => Some("Renovation Products"),
        0x009D => Some("Malibu Games"),
        0x009F => Some("Eidos/U.S. Gold"),
        0x00A0 => Some("Playmates Interactive"),
        0x00A3 => Some("Fox Interactive"),
        0x00A4 => Some("Time Warner Interactive"),
        0x00AA => Some("Disney Interactive"),
        0x00AC => Some("Black Pearl"),
        0x00AE => Some("Advanced Productions"),
        0x00B1 => Some("GT Interactive"),
        0x00B2 => Some("RARE"),
        0x00B3 => Some("Crave Entertainment"),
        0x00B4 => Some("Absolute Entertainment"),
        0x00B5 => Some("Acclaim"),
        0x00B6 => Some("Activision"),
        0x00B7 => Some("American Sammy"),
        0x00B8 => Some("Take 2/GameTek"),
        0x00B9 => Some("Hi Tech"),
        0x00BA => Some("LJN Ltd."),
        0x00BC => Some("Mattel"),
        0x00BE => Some("Mindscape/Red Orb Entertainment"),
        0x00BF => Some("Romstar"),
        0x00C0 => Some("Taxan"),
        0x00C1 => Some("Midway/Tradewest"),
        0x00C3 => Some("American Softworks Corp."),
        0x00C4 => Some("Majesco Sales Inc."),
        0x00C5 => Some("3DO"),
        0x00C8 => Some("Hasbro"),
        0x00C9 => Some("NewKidCo"),
        0x00CA => Some("Telegames"),
        0x00CB => Some("Metro3D"),
        0x00CD => Some("Vatical Entertainment"),
        0x00CE => Some("LEGO Media"),
        0x00D0 => Some("Xicat Interactive"),
        0x00D1 => Some("Cryo Interactive"),
        0x00D4 => Some("Red Storm Entertainment"),
        0x00D5 => Some("Microids"),
        0x00D7 => Some("Conspiracy/Swing"),
        0x00D8 => Some("Titus"),
        0x00D9 => Some("Virgin Interactive"),
        0x00DA => Some("Maxis"),
        0x00DC => Some("LucasArts Entertainment"),
        0x00DF => Some("Ocean"),
        0x00E1 => Some("Electronic Arts"),
        0x00E3 => Some("Laser Beam"),
        0x00E6 => Some("Elite Systems"),
        0x00E7 => Some("Electro Brain"),
        0x00E8 => Some("The Learning Company"),
        0x00E9 => Some("BBC"),
        0x00EB => Some("Software 2000"),
        0x00ED => Some("BAM! Entertainment"),
        0x00EE => Some("Studio 3"),
        0x00F2 => Some("Classified Games"),
        0x00F4 => Some("TDK Mediactive"),
        0x00F6 => Some("DreamCatcher"),
        0x00F7 => Some("JoWood Produtions"),
        0x00F8 => Some("SEGA"),
        0x00F9 => Some("Wannado Edition"),
        0x00FA => Some("LSP (Light & Shadow Prod.)"),
        0x00FB => Some("ITE Media"),
        0x00FC => Some("Infogrames"),
        0x00FD => Some("Interplay"),
        0x00FE => Some("JVC (US)"),
        0x00FF => Some("Parker Brothers"),
        0x0101 => Some("SCI (Sales Curve Interactive)/Storm"),
        0x0104 => Some("THQ Software"),
        0x0105 => Some("Accolade Inc."),
        0x0106 => Some("Triffix Entertainment"),
        0x0108 => Some("Microprose Software"),
        0x0109 => Some("Universal Interactive/Sierra/Simon & Schuster"),
        0x010B => Some("Kemco"),
        0x010C => Some("Rage Software"),
        0x010D => Some("Encore"),
        0x010F => Some("Zoo"),
        0x0110 => Some("Kiddinx"),
        0x0111 => Some("Simon & Schuster Interactive"),
        0x0112 => Some("Asmik Ace Entertainment Inc./AIA"),
        0x0113 => Some("Empire Interactive"),
        0x0116 => Some("Jester Interactive"),
        0x0118 => Some("Rockstar Games"),
        0x0119 => Some("Scholastic"),
        0x011A => Some("Ignition Entertainment"),
        0x011B => Some("Summitsoft"),
        0x011C => Some("Stadlbauer"),
        0x0120 => Some("Misawa"),
        0x0121 => Some("Teichiku"),
        0x0122 => Some("Namco Ltd."),
        0x0123 => Some("LOZC"),
        0x0124 => Some("KOEI"),
        0x0126 => Some("Tokuma Shoten Intermedia"),
        0x0127 => Some("Tsukuda Original"),
        0x0128 => Some("DATAM-Polystar"),
        0x012B => Some("Bullet-Proof Software"),
        0x012C => Some("Vic Tokai Inc."),
        0x012E => Some("Character Soft"),
        0x012F => Some("I'Max"),
        0x0130 => Some("Saurus"),
        0x0133 => Some("General Entertainment"),
        0x0136 => Some("I'Max"),
        0x0137 => Some("Success"),
        0x0139 => Some("SEGA Japan"),
        0x0144 => Some("Takara"),
        0x0145 => Some("Chun Soft"),
        0x0146 => Some("Video System Co., Ltd./McO'River"),
        0x0147 => Some("BEC"),
        0x0149 => Some("Varie"),
        0x014A => Some("Yonezawa/S'pal"),
        0x014B => Some("Kaneko"),
        0x014D => Some("Victor Interactive Software/Pack-in-Video"),
        0x014E => Some("Nichibutsu/Nihon Bussan"),
        0x014F => Some("Tecmo"),
        0x0150 => Some("Imagineer"),
        0x0153 => Some("Nova"),
        0x0154 => Some("Den'Z"),
        0x0155 => Some("Bottom Up"),
        0x0157 => Some("TGL (Technical Group Laboratory)"),
        0x0159 => Some("Hasbro Japan"),
        0x015B => Some("Marvelous Entertainment"),
        0x015D => Some("Keynet Inc."),
        0x015E => Some("Hands-On Entertainment"),
        0x0168 => Some("Telenet"),
        0x0169 => Some("Hori"),
        0x016C => Some("Konami"),
        0x016D => Some("K.Amusement Leasing Co."),
        0x016E => Some("Kawada"),
        0x016F => Some("Takara"),
        0x0171 => Some("Technos Japan Corp."),
        0x0172 => Some("JVC (Europe/Japan)/Victor Musical Industries"),
        0x0174 => Some("Toei Animation"),
        0x0175 => Some("Toho"),
        0x0177 => Some("Namco"),
        0x0178 => Some("Media Rings Corp."),
        0x0179 => Some("J-Wing"),
        0x017B => Some("Pioneer LDC"),
        0x017C => Some("KID"),
        0x017D => Some("Mediafactory"),
        0x0181 => Some("Infogrames Hudson"),
        0x018C => Some("Acclaim Japan"),
        0x018D => Some("ASCII Co./Nexoft"),
        0x018E => Some("Bandai"),
        0x0190 => Some("Enix"),
        0x0192 => Some("HAL Laboratory/Halken"),
        0x0193 => Some("SNK"),
        0x0195 => Some("Pony Canyon Hanbai"),
        0x0196 => Some("Culture Brain"),
        0x0197 => Some("Sunsoft"),
        0x0198 => Some("Toshiba EMI"),
        0x0199 => Some("Sony Imagesoft"),
        0x019B => Some("Sammy"),
        0x019C => Some("Magical"),
        0x019D => Some("Visco"),
        0x019F => Some("Compile"),
        0x01A1 => Some("MTO Inc."),
        0x01A3 => Some("Sunrise Interactive"),
        0x01A5 => Some("Global A Entertainment"),
        0x01A6 => Some("Fuuki"),
        0x01B0 => Some("Taito"),
        0x01B2 => Some("Kemco"),
        0x01B3 => Some("Square"),
        0x01B4 => Some("Tokuma Shoten"),
        0x01B5 => Some("Data East"),
        0x01B6 => Some("Tonkin House"),
        0x01B8 => Some("KOEI"),
        0x01BA => Some("Konami/Ultra/Palcom"),
        0x01BB => Some("NTVIC/VAP"),
        0x01BC => Some("Use Co., Ltd."),
        0x01BD => Some("Meldac"),
        0x01BE => Some("Pony Canyon (Japan)/FCI (US)"),
        0x01BF => Some("Angel/Sotsu Agency/Sunrise"),
        0x01C0 => Some("Yumedia/Aroma Co., Ltd."),
        0x01C3 => Some("Boss"),
        0x01C4 => Some("Axela/Crea-Tech"),
        0x01C5 => Some("Sekaibunka-Sha/Sumire kobo/Marigul Management Inc."),
        0x01C6 => Some("Konami Computer Entertainment Osaka"),
        0x01C9 => Some("Enterbrain"),
        0x01D4 => Some("Taito/Disco"),
        0x01D5 => Some("Sofel"),
        0x01D6 => Some("Quest Corp."),
        0x01D7 => Some("Sigma"),
        0x01D8 => Some("Ask Kodansha"),
        0x01DA => Some("Naxat"),
        0x01DB => Some("Copya System"),
        0x01DC => Some("Capcom Co., Ltd."),
        0x01DD => Some("Banpresto"),
        0x01DE => Some("TOMY"),
        0x01DF => Some("Acclaim/LJN Japan"),
        0x01E1 => Some("NCS"),
        0x01E2 => Some("Human Entertainment"),
        0x01E3 => Some("Altron"),
        0x01E4 => Some("Jaleco"),
        0x01E5 => Some("Gaps Inc."),
        0x01EB => Some("Elf"),
        0x01F8 => Some("Jaleco"),
        0x01FA => Some("Yutaka"),
        0x01FB => Some("Varie"),
        0x01FC => Some("T&ESoft"),
        0x01FD => Some("Epoch Co., Ltd."),
        0x01FF => Some("Athena"),
        0x0200 => Some("Asmik"),
        0x0201 => Some("Natsume"),
        0x0202 => Some("King Records"),
        0x0203 => Some("Atlus"),
        0x0204 => Some("Epic/Sony Records (Japan)"),
        0x0206 => Some("IGS (Information Global Service)"),
        0x0208 => Some("Chatnoir"),
        0x0209 => Some("Right Stuff"),
        0x020B => Some("NTT COMWARE"),
        0x020D => Some("Spike"),
        0x020E => Some("Konami Computer Entertainment Tokyo"),
        0x020F => Some("Alphadream Corp."),
        0x0211 => Some("Sting"),
        0x021C => Some("A Wave"),
        0x021D => Some("Motown Software"),
        0x021E => Some("Left Field Entertainment"),
        0x021F => Some("Extreme Entertainment Group"),
        0x0220 => Some("TecMagik"),
        0x0225 => Some("Cybersoft"),
        0x0227 => Some("Psygnosis"),
        0x022A => Some("Davidson/Western Tech."),
        0x022B => Some("Unlicensed"),
        0x0230 => Some("The Game Factory Europe"),
        0x0231 => Some("Hip Games"),
        0x0232 => Some("Aspyr"),
        0x0235 => Some("Mastiff"),
        0x0236 => Some("iQue"),
        0x0237 => Some("Digital Tainment Pool"),
        0x0238 => Some("XS Games"),
        0x0239 => Some("Daiwon"),
        0x0241 => Some("PCCW Japan"),
        0x0244 => Some("KiKi Co. Ltd."),
        0x0245 => Some("Open Sesame Inc."),
        0x0246 => Some("Sims"),
        0x0247 => Some("Broccoli"),
        0x0248 => Some("Avex"),
        0x0249 => Some("D3 Publisher"),
        0x024B => Some("Konami Computer Entertainment Japan"),
        0x024D => Some("Square-Enix"),
        0x024E => Some("KSG"),
        0x024F => Some("Micott & Basara Inc."),
        0x0251 => Some("Orbital Media"),
        0x0262 => Some("The Game Factory USA"),
        0x0265 => Some("Treasure"),
        0x0266 => Some("Aruze"),
        0x0267 => Some("Ertain"),
        0x0268 => Some("SNK Playmore"),
        0x0299 => Some("Yojigen"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/licensee_tests.rs"]
mod tests;
