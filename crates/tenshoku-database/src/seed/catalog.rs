//! Generated demo job catalog.
//!
//! Job `i` (0-based) combines template `i % 15`, company `i % 20`, and
//! benefit set `i % 8`, takes the first `4 + i % 4` skills of its template,
//! and is dated `i` days before 2024-01-20.

use chrono::{DateTime, Duration, TimeZone, Utc};

use tenshoku_core::types::JobId;
use tenshoku_entity::job::{EmploymentType, Job};

struct Template {
    title: &'static str,
    salary: &'static str,
    description: &'static str,
    requirements: [&'static str; 4],
    skills: &'static [&'static str],
}

struct Company {
    name: &'static str,
    location: &'static str,
}

const TEMPLATES: [Template; 15] = [
    Template {
        title: "フロントエンドエンジニア",
        salary: "500万円〜800万円",
        description: "モダンなフロントエンド技術を使用したWebアプリケーション開発をお任せします。React、TypeScriptを中心とした開発環境で、ユーザー体験を重視したプロダクト開発に携わっていただきます。",
        requirements: [
            "React/Vue.js等のフレームワーク経験3年以上",
            "TypeScriptの実務経験",
            "Git/GitHubを使用したチーム開発経験",
            "レスポンシブデザインの実装経験",
        ],
        skills: &["React", "TypeScript", "Next.js", "Vue.js", "JavaScript", "HTML", "CSS", "Tailwind CSS"],
    },
    Template {
        title: "バックエンドエンジニア",
        salary: "600万円〜900万円",
        description: "大規模なクラウドサービスのバックエンド開発をリードしていただきます。マイクロサービスアーキテクチャの設計・実装から、パフォーマンス最適化まで幅広く担当していただきます。",
        requirements: [
            "Go/Python/Node.js等でのバックエンド開発経験5年以上",
            "AWSまたはGCPの実務経験",
            "データベース設計・最適化の経験",
            "CI/CDパイプラインの構築経験",
        ],
        skills: &["Go", "Python", "Node.js", "Java", "AWS", "GCP", "PostgreSQL", "MySQL", "Redis"],
    },
    Template {
        title: "フルスタックエンジニア",
        salary: "550万円〜850万円",
        description: "新規プロダクトの立ち上げから運用まで、フルスタックで開発に携わっていただきます。少人数チームでスピード感を持って開発を進める環境です。",
        requirements: [
            "Web開発経験3年以上",
            "フロントエンドとバックエンド両方の経験",
            "クラウドサービスの利用経験",
            "アジャイル開発の経験",
        ],
        skills: &["React", "Node.js", "TypeScript", "PostgreSQL", "AWS", "Docker", "GraphQL"],
    },
    Template {
        title: "データエンジニア",
        salary: "600万円〜950万円",
        description: "大規模データ基盤の構築・運用を担当していただきます。データパイプラインの設計から、分析基盤の整備まで幅広く携わっていただきます。",
        requirements: [
            "データエンジニアリング経験3年以上",
            "SQL、Python等のプログラミングスキル",
            "Spark、Airflow等の経験",
            "データウェアハウスの設計経験",
        ],
        skills: &["Python", "SQL", "Spark", "Airflow", "BigQuery", "Snowflake", "dbt", "AWS"],
    },
    Template {
        title: "モバイルアプリエンジニア",
        salary: "500万円〜750万円",
        description: "iOS/Androidアプリの開発を担当していただきます。Swift、Kotlinを使用したネイティブアプリ開発、またはFlutterを使用したクロスプラットフォーム開発に携わります。",
        requirements: [
            "iOS/Androidアプリ開発経験2年以上",
            "Swift、Kotlin、またはFlutterの経験",
            "App Store/Google Playへのリリース経験",
            "UI/UXへの強い関心",
        ],
        skills: &["Swift", "Kotlin", "Flutter", "React Native", "iOS", "Android", "Firebase"],
    },
    Template {
        title: "SREエンジニア",
        salary: "650万円〜1000万円",
        description: "大規模サービスの信頼性向上を担当していただきます。インフラ設計、モニタリング、障害対応、自動化など、SRE全般の業務に携わっていただきます。",
        requirements: [
            "SRE/インフラエンジニア経験5年以上",
            "Kubernetes、Docker等のコンテナ技術",
            "Terraform等のIaCツールの経験",
            "オンコール対応の経験",
        ],
        skills: &["Kubernetes", "Docker", "Terraform", "AWS", "GCP", "Prometheus", "Grafana", "Linux"],
    },
    Template {
        title: "セキュリティエンジニア",
        salary: "600万円〜1000万円",
        description: "企業のセキュリティ対策全般を担当していただきます。脆弱性診断、セキュリティ監視、インシデント対応など幅広い業務に携わります。",
        requirements: [
            "セキュリティエンジニア経験3年以上",
            "脆弱性診断の経験",
            "セキュリティ監視ツールの運用経験",
            "セキュリティ資格保有者歓迎",
        ],
        skills: &["AWS", "Azure", "Splunk", "SIEM", "Linux", "Python", "ネットワーク", "クラウドセキュリティ"],
    },
    Template {
        title: "MLエンジニア",
        salary: "700万円〜1200万円",
        description: "機械学習モデルの開発・運用を担当していただきます。データ分析からモデル構築、本番環境へのデプロイまで一貫して携わります。",
        requirements: [
            "機械学習エンジニア経験3年以上",
            "Python、TensorFlow/PyTorchの経験",
            "MLOpsの知識",
            "統計学・数学の知識",
        ],
        skills: &["Python", "TensorFlow", "PyTorch", "scikit-learn", "MLflow", "AWS SageMaker", "Kubernetes"],
    },
    Template {
        title: "DevOpsエンジニア",
        salary: "550万円〜900万円",
        description: "開発・運用の効率化を推進していただきます。CI/CDパイプラインの構築、インフラの自動化、開発環境の改善に取り組みます。",
        requirements: [
            "DevOpsエンジニア経験3年以上",
            "CI/CDツールの構築経験",
            "クラウドインフラの運用経験",
            "スクリプト言語の経験",
        ],
        skills: &["Docker", "Kubernetes", "Jenkins", "GitHub Actions", "Terraform", "Ansible", "AWS", "GCP"],
    },
    Template {
        title: "QAエンジニア",
        salary: "450万円〜700万円",
        description: "プロダクトの品質保証を担当していただきます。テスト設計、自動テストの構築、品質改善の提案など幅広く携わります。",
        requirements: [
            "QAエンジニア経験2年以上",
            "テスト設計・実行の経験",
            "自動テストツールの経験",
            "品質改善の提案経験",
        ],
        skills: &["Selenium", "Cypress", "Jest", "TestRail", "JIRA", "Python", "JavaScript"],
    },
    Template {
        title: "テックリード",
        salary: "800万円〜1300万円",
        description: "エンジニアチームの技術的なリーダーシップを担っていただきます。技術選定、アーキテクチャ設計、メンバーの育成に携わります。",
        requirements: [
            "エンジニア経験7年以上",
            "チームリーダー経験",
            "アーキテクチャ設計の経験",
            "技術選定の経験",
        ],
        skills: &["React", "Node.js", "AWS", "システム設計", "アーキテクチャ", "TypeScript", "Go"],
    },
    Template {
        title: "エンジニアリングマネージャー",
        salary: "900万円〜1500万円",
        description: "エンジニアチームのマネジメントを担当していただきます。チームビルディング、目標設定、評価、採用など幅広い業務に携わります。",
        requirements: [
            "エンジニア経験5年以上",
            "マネジメント経験2年以上",
            "チームビルディングの経験",
            "採用・評価の経験",
        ],
        skills: &["アジャイル", "スクラム", "チームマネジメント", "プロジェクト管理", "1on1", "採用"],
    },
    Template {
        title: "プロダクトマネージャー",
        salary: "700万円〜1200万円",
        description: "プロダクトの企画・開発をリードしていただきます。要件定義、ロードマップ策定、ステークホルダーとの調整を担当します。",
        requirements: [
            "PM経験3年以上",
            "Webサービスの企画・開発経験",
            "ステークホルダー調整の経験",
            "データ分析スキル",
        ],
        skills: &["プロダクト戦略", "ロードマップ", "データ分析", "SQL", "JIRA", "Figma", "ユーザーインタビュー"],
    },
    Template {
        title: "UIデザイナー",
        salary: "450万円〜750万円",
        description: "Webサービス・アプリのUIデザインを担当していただきます。Figmaを使用したデザイン制作、デザインシステムの構築に携わります。",
        requirements: [
            "UIデザイン経験3年以上",
            "Figma/Sketchの実務経験",
            "デザインシステム構築の経験",
            "フロントエンド知識歓迎",
        ],
        skills: &["Figma", "Sketch", "Adobe XD", "Photoshop", "Illustrator", "デザインシステム", "UI設計"],
    },
    Template {
        title: "UXデザイナー",
        salary: "500万円〜800万円",
        description: "ユーザー体験の設計を担当していただきます。ユーザーリサーチ、プロトタイピング、ユーザビリティテストに携わります。",
        requirements: [
            "UXデザイン経験3年以上",
            "ユーザーリサーチの経験",
            "プロトタイピングツールの経験",
            "定量・定性分析の経験",
        ],
        skills: &["ユーザーリサーチ", "ワイヤーフレーム", "プロトタイピング", "Figma", "ユーザビリティテスト", "A/Bテスト"],
    },
];

const COMPANIES: [Company; 20] = [
    Company { name: "株式会社テックイノベーション", location: "東京都渋谷区" },
    Company { name: "株式会社クラウドソリューションズ", location: "東京都港区" },
    Company { name: "スタートアップラボ株式会社", location: "大阪府大阪市" },
    Company { name: "株式会社ビッグデータ", location: "フルリモート" },
    Company { name: "株式会社アプリクリエイト", location: "福岡県福岡市" },
    Company { name: "株式会社インフラテック", location: "東京都千代田区" },
    Company { name: "グローバルテック株式会社", location: "東京都新宿区" },
    Company { name: "株式会社AIラボ", location: "東京都文京区" },
    Company { name: "フィンテック株式会社", location: "東京都中央区" },
    Company { name: "株式会社ヘルステック", location: "神奈川県横浜市" },
    Company { name: "エドテック株式会社", location: "京都府京都市" },
    Company { name: "株式会社モビリティ", location: "愛知県名古屋市" },
    Company { name: "リテールテック株式会社", location: "大阪府大阪市" },
    Company { name: "株式会社メディアプラス", location: "フルリモート" },
    Company { name: "セキュアネット株式会社", location: "東京都品川区" },
    Company { name: "株式会社クリエイティブワークス", location: "福岡県福岡市" },
    Company { name: "データドリブン株式会社", location: "フルリモート" },
    Company { name: "株式会社スマートシティ", location: "北海道札幌市" },
    Company { name: "エンタープライズ株式会社", location: "東京都千代田区" },
    Company { name: "株式会社ネクストジェネレーション", location: "東京都渋谷区" },
];

const BENEFITS: [&[&str]; 8] = [
    &["フルリモート可", "フレックスタイム制", "書籍購入補助", "資格取得支援", "年間休日125日"],
    &["ハイブリッドワーク", "ストックオプション", "健康診断充実", "社内勉強会", "副業OK"],
    &["完全フルリモート", "年収1000万円以上も可", "裁量労働制", "最新技術の導入積極的"],
    &["地方移住支援", "フレックスタイム", "最新デバイス支給", "カンファレンス参加支援"],
    &["高年収", "リモートワーク可", "技術投資惜しまない", "グローバルチーム"],
    &["週休3日制度あり", "育休取得実績多数", "社員食堂あり", "交通費全額支給"],
    &["401k制度", "社内バー", "ペット同伴可", "ジム利用補助"],
    &["フルフレックス", "有給消化率90%以上", "メンター制度", "1on1充実"],
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn newest_posting_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn employment_type(i: usize) -> EmploymentType {
    if i % 10 == 0 {
        EmploymentType::Contract
    } else if i % 15 == 0 {
        EmploymentType::Outsourced
    } else {
        EmploymentType::FullTime
    }
}

/// Build the `i`-th (0-based) catalog job.
pub fn generate_job(i: usize) -> Job {
    let template = &TEMPLATES[i % TEMPLATES.len()];
    let company = &COMPANIES[i % COMPANIES.len()];
    let benefits = BENEFITS[i % BENEFITS.len()];
    let skill_count = (4 + i % 4).min(template.skills.len());
    let seq = i as u64 + 1;

    Job {
        id: JobId::from_seq(seq),
        title: template.title.to_string(),
        company: company.name.to_string(),
        location: company.location.to_string(),
        salary: template.salary.to_string(),
        description: template.description.to_string(),
        requirements: owned(&template.requirements),
        benefits: owned(benefits),
        skills: owned(&template.skills[..skill_count]),
        employment_type: employment_type(i),
        image_url: format!("https://picsum.photos/seed/job{seq}/400/250"),
        created_at: newest_posting_date() - Duration::days(i as i64),
    }
}

/// Build a catalog of `count` jobs.
pub fn generate_jobs(count: usize) -> Vec<Job> {
    (0..count).map(generate_job).collect()
}
