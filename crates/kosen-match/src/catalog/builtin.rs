use super::{CollegeId, CollegeRecord};

struct BuiltinCollege {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    departments: &'static [&'static str],
    description: Option<&'static str>,
}

const COLLEGES: &[BuiltinCollege] = &[
    BuiltinCollege {
        id: "tokyo",
        name: "東京工業高等専門学校",
        location: "東京都八王子市",
        departments: &[
            "機械工学科",
            "電気工学科",
            "電子工学科",
            "情報工学科",
            "物質工学科",
        ],
        description: Some("都内唯一の国立高専。ロボコンの強豪校として知られる。"),
    },
    BuiltinCollege {
        id: "nagaoka",
        name: "長岡工業高等専門学校",
        location: "新潟県長岡市",
        departments: &[
            "機械工学科",
            "電気電子システム工学科",
            "電子制御工学科",
            "物質工学科",
            "環境都市工学科",
        ],
        description: None,
    },
    BuiltinCollege {
        id: "akashi",
        name: "明石工業高等専門学校",
        location: "兵庫県明石市",
        departments: &["機械工学科", "電気情報工学科", "都市システム工学科", "建築学科"],
        description: Some("建築学科を持つ数少ない高専の一つ。"),
    },
    BuiltinCollege {
        id: "toba-shosen",
        name: "鳥羽商船高等専門学校",
        location: "三重県鳥羽市",
        departments: &["商船学科", "情報機械システム工学科"],
        description: Some("練習船を保有し、航海士・機関士を養成する。"),
    },
    BuiltinCollege {
        id: "kisarazu",
        name: "木更津工業高等専門学校",
        location: "千葉県木更津市",
        departments: &[
            "機械工学科",
            "電気電子工学科",
            "電子制御工学科",
            "情報工学科",
            "環境都市工学科",
        ],
        description: None,
    },
    BuiltinCollege {
        id: "kobe-city",
        name: "神戸市立工業高等専門学校",
        location: "兵庫県神戸市",
        departments: &[
            "機械工学科",
            "電気工学科",
            "電子工学科",
            "応用化学科",
            "都市工学科",
        ],
        description: None,
    },
    BuiltinCollege {
        id: "ube",
        name: "宇部工業高等専門学校",
        location: "山口県宇部市",
        departments: &[
            "機械工学科",
            "電気工学科",
            "制御情報工学科",
            "物質工学科",
            "経営情報学科",
        ],
        description: None,
    },
    BuiltinCollege {
        id: "kumamoto",
        name: "熊本高等専門学校",
        location: "熊本県合志市・八代市",
        departments: &[
            "情報通信エレクトロニクス工学科",
            "制御情報システム工学科",
            "人間情報システム工学科",
            "機械知能システム工学科",
            "建築社会デザイン工学科",
            "生物化学システム工学科",
        ],
        description: Some("二つのキャンパスに六学科を擁する。"),
    },
    BuiltinCollege {
        id: "okinawa",
        name: "沖縄工業高等専門学校",
        location: "沖縄県名護市",
        departments: &[
            "機械システム工学科",
            "情報通信システム工学科",
            "メディア情報工学科",
            "生物資源工学科",
        ],
        description: Some("全寮制。国際交流プログラムが充実している。"),
    },
    BuiltinCollege {
        id: "asahikawa",
        name: "旭川工業高等専門学校",
        location: "北海道旭川市",
        departments: &[
            "機械システム工学科",
            "電気情報工学科",
            "システム制御情報工学科",
            "物質化学工学科",
        ],
        description: None,
    },
    BuiltinCollege {
        id: "hiroshima-shosen",
        name: "広島商船高等専門学校",
        location: "広島県豊田郡大崎上島町",
        departments: &["商船学科", "電子制御工学科", "流通情報工学科"],
        description: None,
    },
    BuiltinCollege {
        id: "oshima-shosen",
        name: "大島商船高等専門学校",
        location: "山口県大島郡周防大島町",
        departments: &["商船学科", "電子機械工学科", "情報工学科"],
        description: None,
    },
];

pub(super) fn colleges() -> Vec<CollegeRecord> {
    COLLEGES
        .iter()
        .map(|college| CollegeRecord {
            id: CollegeId(college.id.to_string()),
            name: college.name.to_string(),
            location: college.location.to_string(),
            departments: college
                .departments
                .iter()
                .map(|department| department.to_string())
                .collect(),
            description: college.description.map(str::to_string),
        })
        .collect()
}
