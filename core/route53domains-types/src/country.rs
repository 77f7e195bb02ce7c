//! Country codes accepted for domain contacts.

crate::string_enum! {
    /// Two-letter country code of a contact address.
    ///
    /// The set follows the service model rather than the current ISO 3166
    /// list; `AN` (Netherlands Antilles) is still accepted by the registry.
    pub enum CountryCode = "CountryCode" {
        Ad => "AD",
        Ae => "AE",
        Af => "AF",
        Ag => "AG",
        Ai => "AI",
        Al => "AL",
        Am => "AM",
        An => "AN",
        Ao => "AO",
        Aq => "AQ",
        Ar => "AR",
        As => "AS",
        At => "AT",
        Au => "AU",
        Aw => "AW",
        Az => "AZ",
        Ba => "BA",
        Bb => "BB",
        Bd => "BD",
        Be => "BE",
        Bf => "BF",
        Bg => "BG",
        Bh => "BH",
        Bi => "BI",
        Bj => "BJ",
        Bl => "BL",
        Bm => "BM",
        Bn => "BN",
        Bo => "BO",
        Br => "BR",
        Bs => "BS",
        Bt => "BT",
        Bw => "BW",
        By => "BY",
        Bz => "BZ",
        Ca => "CA",
        Cc => "CC",
        Cd => "CD",
        Cf => "CF",
        Cg => "CG",
        Ch => "CH",
        Ci => "CI",
        Ck => "CK",
        Cl => "CL",
        Cm => "CM",
        Cn => "CN",
        Co => "CO",
        Cr => "CR",
        Cu => "CU",
        Cv => "CV",
        Cx => "CX",
        Cy => "CY",
        Cz => "CZ",
        De => "DE",
        Dj => "DJ",
        Dk => "DK",
        Dm => "DM",
        Do => "DO",
        Dz => "DZ",
        Ec => "EC",
        Ee => "EE",
        Eg => "EG",
        Er => "ER",
        Es => "ES",
        Et => "ET",
        Fi => "FI",
        Fj => "FJ",
        Fk => "FK",
        Fm => "FM",
        Fo => "FO",
        Fr => "FR",
        Ga => "GA",
        Gb => "GB",
        Gd => "GD",
        Ge => "GE",
        Gh => "GH",
        Gi => "GI",
        Gl => "GL",
        Gm => "GM",
        Gn => "GN",
        Gq => "GQ",
        Gr => "GR",
        Gt => "GT",
        Gu => "GU",
        Gw => "GW",
        Gy => "GY",
        Hk => "HK",
        Hn => "HN",
        Hr => "HR",
        Ht => "HT",
        Hu => "HU",
        Id => "ID",
        Ie => "IE",
        Il => "IL",
        Im => "IM",
        In => "IN",
        Iq => "IQ",
        Ir => "IR",
        Is => "IS",
        It => "IT",
        Jm => "JM",
        Jo => "JO",
        Jp => "JP",
        Ke => "KE",
        Kg => "KG",
        Kh => "KH",
        Ki => "KI",
        Km => "KM",
        Kn => "KN",
        Kp => "KP",
        Kr => "KR",
        Kw => "KW",
        Ky => "KY",
        Kz => "KZ",
        La => "LA",
        Lb => "LB",
        Lc => "LC",
        Li => "LI",
        Lk => "LK",
        Lr => "LR",
        Ls => "LS",
        Lt => "LT",
        Lu => "LU",
        Lv => "LV",
        Ly => "LY",
        Ma => "MA",
        Mc => "MC",
        Md => "MD",
        Me => "ME",
        Mf => "MF",
        Mg => "MG",
        Mh => "MH",
        Mk => "MK",
        Ml => "ML",
        Mm => "MM",
        Mn => "MN",
        Mo => "MO",
        Mp => "MP",
        Mr => "MR",
        Ms => "MS",
        Mt => "MT",
        Mu => "MU",
        Mv => "MV",
        Mw => "MW",
        Mx => "MX",
        My => "MY",
        Mz => "MZ",
        Na => "NA",
        Nc => "NC",
        Ne => "NE",
        Ng => "NG",
        Ni => "NI",
        Nl => "NL",
        No => "NO",
        Np => "NP",
        Nr => "NR",
        Nu => "NU",
        Nz => "NZ",
        Om => "OM",
        Pa => "PA",
        Pe => "PE",
        Pf => "PF",
        Pg => "PG",
        Ph => "PH",
        Pk => "PK",
        Pl => "PL",
        Pm => "PM",
        Pn => "PN",
        Pr => "PR",
        Pt => "PT",
        Pw => "PW",
        Py => "PY",
        Qa => "QA",
        Ro => "RO",
        Rs => "RS",
        Ru => "RU",
        Rw => "RW",
        Sa => "SA",
        Sb => "SB",
        Sc => "SC",
        Sd => "SD",
        Se => "SE",
        Sg => "SG",
        Sh => "SH",
        Si => "SI",
        Sk => "SK",
        Sl => "SL",
        Sm => "SM",
        Sn => "SN",
        So => "SO",
        Sr => "SR",
        St => "ST",
        Sv => "SV",
        Sy => "SY",
        Sz => "SZ",
        Tc => "TC",
        Td => "TD",
        Tg => "TG",
        Th => "TH",
        Tj => "TJ",
        Tk => "TK",
        Tl => "TL",
        Tm => "TM",
        Tn => "TN",
        To => "TO",
        Tr => "TR",
        Tt => "TT",
        Tv => "TV",
        Tw => "TW",
        Tz => "TZ",
        Ua => "UA",
        Ug => "UG",
        Us => "US",
        Uy => "UY",
        Uz => "UZ",
        Va => "VA",
        Vc => "VC",
        Ve => "VE",
        Vg => "VG",
        Vi => "VI",
        Vn => "VN",
        Vu => "VU",
        Wf => "WF",
        Ws => "WS",
        Ye => "YE",
        Yt => "YT",
        Za => "ZA",
        Zm => "ZM",
        Zw => "ZW",
    }
}
