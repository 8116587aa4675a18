//! # Ingredient Tables Module
//!
//! Built-in data for ingredient matching: the synonym table (Italian names with
//! English translations and common variants) and the list of pantry staples that
//! are assumed to always be at hand.

/// Pantry staples that count as available whatever the inventory holds
pub const COMMON_INGREDIENTS: &[&str] = &[
    "aglio", "garlic", "spicchio d'aglio",
    "olio", "olio d'oliva", "olive oil", "olio extravergine",
    "sale", "salt", "sale fino", "sale grosso",
    "pepe", "pepper", "pepe nero", "black pepper",
    "acqua", "water", "acqua fredda", "acqua calda",
    "aceto", "vinegar", "aceto balsamico", "aceto di vino",
    "rosmarino", "rosemary", "rosmarino fresco",
    "origano", "oregano", "origano secco",
    "basilico", "basil", "basilico fresco",
    "prezzemolo", "parsley", "prezzemolo fresco",
    "timo", "thyme", "timo fresco",
    "alloro", "bay leaf", "foglia di alloro",
    "peperoncino", "chili", "peperoncino piccante",
    "paprika", "paprika dolce", "paprika affumicata",
    "cannella", "cinnamon", "cannella in polvere",
    "noce moscata", "nutmeg", "noce moscata grattugiata",
    "zenzero", "ginger", "zenzero fresco",
    "curcuma", "turmeric", "curcuma in polvere",
    "cumino", "cumin", "cumino in polvere",
    "coriandolo", "coriander", "coriandolo fresco",
    "aneto", "dill", "aneto fresco",
    "maggiorana", "marjoram", "maggiorana secca",
    "salvia", "sage", "salvia fresca",
    "menta", "mint", "menta fresca",
    "limone", "lemon", "succo di limone", "scorza di limone",
    "lime", "lime juice", "succo di lime",
    "arancia", "orange", "succo d'arancia", "scorza d'arancia",
    "zucchero", "sugar", "zucchero bianco", "zucchero di canna",
    "miele", "honey", "miele di acacia",
    "lievito", "yeast", "lievito di birra", "lievito secco",
    "bicarbonato", "baking soda", "bicarbonato di sodio",
    "vanillina", "vanilla", "vanilla extract",
    "cacao", "cocoa", "cacao in polvere",
    "caffè", "coffee", "caffè solubile",
    "brodo", "broth", "brodo vegetale", "brodo di carne",
    "dado", "stock cube", "dado vegetale",
    "concentrato di pomodoro", "tomato paste", "doppio concentrato",
    "capperi", "capers", "capperi sotto sale",
];

/// Canonical ingredient name and its alternate names, in lookup order
pub const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Vegetables
    ("pomodoro", &["tomato", "pomodori", "pomodorini", "cherry tomato"]),
    ("pomodori", &["tomato", "pomodoro", "pomodorini", "cherry tomato"]),
    ("cipolla", &["onion", "cipolle", "cipollotto"]),
    ("cipolle", &["onion", "cipolla", "cipollotto"]),
    ("aglio", &["garlic", "aglio fresco", "spicchio d'aglio"]),
    ("carota", &["carrot", "carote"]),
    ("carote", &["carrot", "carota"]),
    ("sedano", &["celery", "sedano rapa"]),
    ("peperone", &["bell pepper", "peperoni", "peperoncino"]),
    ("peperoni", &["bell pepper", "peperone", "peperoncino"]),
    ("zucchina", &["zucchini", "zucchine", "courgette"]),
    ("zucchine", &["zucchini", "zucchina", "courgette"]),
    ("melanzana", &["eggplant", "melanzane", "aubergine"]),
    ("melanzane", &["eggplant", "melanzana", "aubergine"]),
    ("spinaci", &["spinach", "spinaci freschi"]),
    ("lattuga", &["lettuce", "insalata", "lattuga iceberg"]),
    ("insalata", &["lettuce", "lattuga", "salad"]),
    // Meat
    (
        "carne",
        &[
            "beef", "meat", "carne macinata", "manzo", "ground beef", "beef steak",
            "beef mince", "beef meat", "carne bovina",
        ],
    ),
    (
        "manzo",
        &[
            "beef", "carne", "bistecca", "ground beef", "beef steak", "beef mince",
            "beef meat", "carne bovina",
        ],
    ),
    (
        "pollo",
        &[
            "chicken", "pollo intero", "petto di pollo", "chicken breast", "chicken thigh",
            "chicken meat",
        ],
    ),
    (
        "maiale",
        &["pork", "carne di maiale", "lonza", "pork chop", "pork meat", "pork loin"],
    ),
    ("agnello", &["lamb", "carne di agnello", "lamb meat", "lamb chop"]),
    ("tacchino", &["turkey", "pollo di tacchino", "turkey meat", "turkey breast"]),
    (
        "prosciutto",
        &["ham", "prosciutto crudo", "prosciutto cotto", "cooked ham", "raw ham"],
    ),
    ("pancetta", &["bacon", "guanciale", "pancetta affumicata"]),
    (
        "salsiccia",
        &["sausage", "salsicce", "wurstel", "italian sausage", "pork sausage"],
    ),
    (
        "salsicce",
        &["sausage", "salsiccia", "wurstel", "italian sausage", "pork sausage"],
    ),
    // Fish
    ("pesce", &["fish", "pesce fresco"]),
    ("salmone", &["salmon", "salmone fresco"]),
    ("tonno", &["tuna", "tonno in scatola"]),
    ("merluzzo", &["cod", "baccalà"]),
    ("gamberi", &["shrimp", "gamberetti", "scampi"]),
    ("gamberetti", &["shrimp", "gamberi", "scampi"]),
    ("cozze", &["mussels", "cozze fresche"]),
    ("vongole", &["clams", "vongole veraci"]),
    // Dairy
    ("latte", &["milk", "latte intero", "latte scremato"]),
    ("formaggio", &["cheese", "formaggio fresco"]),
    ("parmigiano", &["parmesan", "parmigiano reggiano", "grana"]),
    ("mozzarella", &["mozzarella", "mozzarella di bufala"]),
    ("ricotta", &["ricotta", "ricotta fresca"]),
    ("yogurt", &["yogurt", "yogurt greco"]),
    ("burro", &["butter", "burro salato"]),
    ("panna", &["cream", "panna fresca", "panna da cucina"]),
    // Eggs
    ("uova", &["eggs", "uovo", "uova fresche"]),
    ("uovo", &["egg", "uova", "uova fresche"]),
    // Cereals and pasta
    ("pasta", &["pasta", "spaghetti", "penne", "rigatoni"]),
    ("riso", &["rice", "riso basmati", "riso integrale"]),
    ("pane", &["bread", "pane fresco", "pane integrale"]),
    ("farina", &["flour", "farina 00", "farina integrale"]),
    ("pizza", &["pizza", "pizza margherita"]),
    // Legumes
    ("fagioli", &["beans", "fagioli cannellini", "fagioli borlotti"]),
    ("lenticchie", &["lentils", "lenticchie rosse"]),
    ("ceci", &["chickpeas", "ceci secchi"]),
    ("piselli", &["peas", "piselli freschi"]),
    // Fruit
    ("mela", &["apple", "mele", "mela rossa"]),
    ("mele", &["apple", "mela", "mele rosse"]),
    ("banana", &["banana", "banane"]),
    ("banane", &["banana", "banane"]),
    ("arancia", &["orange", "arance", "arancia rossa"]),
    ("arance", &["orange", "arancia", "arance rosse"]),
    ("limone", &["lemon", "limoni", "limone fresco"]),
    ("limoni", &["lemon", "limone", "limoni freschi"]),
    ("fragole", &["strawberries", "fragole fresche"]),
    ("fragola", &["strawberry", "fragole", "fragole fresche"]),
    // Herbs and spices
    ("basilico", &["basil", "basilico fresco"]),
    ("prezzemolo", &["parsley", "prezzemolo fresco"]),
    ("origano", &["oregano", "origano secco"]),
    ("rosmarino", &["rosemary", "rosmarino fresco"]),
    ("salvia", &["sage", "salvia fresca"]),
    ("timo", &["thyme", "timo fresco"]),
    ("pepe", &["pepper", "pepe nero"]),
    ("sale", &["salt", "sale grosso"]),
    ("olio", &["oil", "olio d'oliva", "olio extravergine"]),
    ("aceto", &["vinegar", "aceto balsamico"]),
    // Mushrooms
    ("funghi", &["mushrooms", "funghi porcini", "champignon"]),
    ("funghi porcini", &["porcini mushrooms", "funghi", "porcini"]),
    // Nuts and seeds
    ("noci", &["walnuts", "noci sgusciate"]),
    ("mandorle", &["almonds", "mandorle sgusciate"]),
    ("pinoli", &["pine nuts", "pinoli"]),
    // Other
    ("patate", &["potatoes", "patate novelle"]),
    ("patata", &["potato", "patate", "patate novelle"]),
];
