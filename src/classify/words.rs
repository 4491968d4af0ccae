//! Built-in word tables for the lexicon
//!
//! Genuine 5-letter English words only. Entries are lowercase ASCII and
//! unique; `Lexicon` re-validates them when it is built.

/// Dictionary words (`word` tag)
pub const DICTIONARY_WORDS: &[&str] = &[
    "about", "above", "abuse", "acres", "acute", "admin", "admit", "adopt",
    "adult", "after", "again", "agent", "agile", "agree", "ahead", "alarm",
    "album", "alert", "alien", "alike", "alive", "allow", "alone", "along",
    "alpha", "amber", "amply", "angel", "anger", "angle", "angry", "apart",
    "apple", "apply", "arena", "argue", "arise", "array", "arrow", "aside",
    "asset", "async", "audio", "audit", "avoid", "awake", "award", "aware",
    "badge", "baker", "batch", "beach", "bears", "beast", "began", "begin",
    "being", "belly", "below", "bench", "berry", "bikes", "bills", "bingo",
    "birth", "black", "blade", "blame", "blank", "blast", "blaze", "bleed",
    "blend", "bless", "blind", "block", "blood", "bloom", "board", "boats",
    "bogus", "bonus", "books", "boost", "booth", "bound", "brain", "brand",
    "brave", "bread", "break", "breed", "brick", "bride", "brief", "bring",
    "brink", "broad", "broke", "brown", "brush", "buddy", "build", "built",
    "bunny", "burst", "buyer", "buzzy", "bytes", "cable", "cache", "cadet",
    "cages", "cakes", "calls", "camel", "camps", "canal", "candy", "canoe",
    "cards", "cargo", "carol", "carry", "cases", "catch", "cause", "caves",
    "cedar", "chain", "chair", "chaos", "charm", "chart", "chase", "cheap",
    "cheat", "check", "chess", "chest", "chief", "child", "chips", "chose",
    "civic", "civil", "claim", "class", "clean", "clear", "click", "cliff",
    "climb", "clock", "close", "cloth", "cloud", "coach", "coast", "cobra",
    "codes", "coins", "color", "combo", "comet", "comic", "coral", "cores",
    "corps", "costs", "could", "count", "court", "cover", "coves", "crack",
    "craft", "crash", "crate", "crazy", "cream", "creek", "crime", "crisp",
    "cross", "crowd", "crown", "crude", "crush", "crust", "cubic", "curve",
    "cyber", "cycle", "daily", "dairy", "dance", "deals", "dealt", "death",
    "debug", "debut", "decor", "decoy", "delay", "delta", "dense", "depth",
    "derby", "devil", "diary", "dices", "digit", "diner", "disco", "diver",
    "divot", "dizzy", "docks", "dodge", "doing", "dolls", "donor", "doors",
    "doubt", "dough", "doves", "downs", "draft", "drain", "drake", "drank",
    "drape", "draws", "dread", "dream", "dress", "dried", "drier", "dries",
    "drift", "drill", "drink", "drive", "droit", "droll", "drone", "drool",
    "droop", "drops", "dross", "drove", "drown", "drums", "drunk", "dudes",
    "dulls", "dully", "dummy", "dumpy", "dunce", "dunes", "dusky", "dusty",
    "duvet", "dwell", "dying", "eager", "eagle", "early", "earth", "eased",
    "easel", "eases", "eater", "ebony", "edged", "edger", "edges", "edict",
    "edits", "egged", "egret", "eject", "elbow", "elder", "elect", "elite",
    "elope", "elude", "email", "embed", "ember", "emcee", "emoji", "enemy",
    "enjoy", "ensue", "enter", "entry", "envoy", "epoch", "equal", "equip",
    "erase", "erect", "error", "erupt", "essay", "ether", "ethic", "ethos",
    "evade", "event", "every", "evict", "evoke", "exact", "exalt", "exams",
    "excel", "exert", "exile", "exist", "expel", "extra", "exude", "exult",
    "fable", "faced", "faces", "facet", "facts", "faded", "fades", "fails",
    "faint", "fairs", "fairy", "faith", "falls", "false", "fancy", "fangs",
    "farms", "fatal", "fated", "fates", "fatty", "fault", "fauna", "favor",
    "faxed", "faxes", "fears", "feast", "feats", "feeds", "feels", "fence",
    "ferns", "ferry", "fetal", "fetch", "fetid", "fever", "fewer", "fiber",
    "field", "fiend", "fiery", "fifes", "fifth", "fifty", "fight", "files",
    "fills", "films", "filth", "final", "finch", "finds", "fined", "finer",
    "fines", "finny", "fires", "firms", "first", "fishy", "fists", "fixed",
    "fixer", "fixes", "fizzy", "fjord", "flack", "flags", "flail", "flair",
    "flake", "flaky", "flame", "flank", "flaps", "flare", "flash", "flask",
    "flats", "flaws", "fleas", "fleck", "flees", "fleet", "flesh", "flick",
    "flier", "flies", "fling", "flint", "flips", "flirt", "float", "flock",
    "flood", "floor", "flops", "flora", "flour", "flout", "flows", "fluid",
    "fluke", "flung", "flush", "flute", "foams", "foamy", "focal", "focus",
    "foggy", "foils", "folds", "folks", "folly", "fonts", "foods", "fools",
    "foots", "foray", "force", "forge", "forgo", "forks", "forms", "forte",
    "forth", "forty", "forum", "foyer", "frail", "frame", "frank", "fraud",
    "freak", "freer", "frees", "fresh", "friar", "fried", "fries", "frill",
    "frisk", "frizz", "frock", "front", "frost", "froth", "frown", "froze",
    "fruit", "fryer", "fuels", "fugue", "fully", "fumes", "funds", "funky",
    "funny", "furor", "furry", "fused", "fuses", "fussy", "fuzzy", "gains",
    "gales", "gamer", "games", "gamma", "gangs", "gates", "gauge", "gaunt",
    "gauze", "gavel", "gears", "geeks", "genus", "germs", "giant", "giddy",
    "gifts", "gills", "girls", "given", "giver", "gives", "gizmo", "glade",
    "gland", "glare", "glass", "glaze", "gleam", "glean", "glees", "glens",
    "glide", "glint", "gloom", "glory", "gloss", "glove", "glued", "glues",
    "gnarl", "gnash", "gnats", "gnome", "goals", "goats", "godly", "going",
    "golds", "golfs", "goods", "gooey", "goofy", "goons", "goose", "gored",
    "gorge", "gorse", "gotta", "gouge", "gourd", "gowns", "grabs", "grace",
    "grade", "grads", "graft", "grail", "grain", "grand", "grant", "grape",
    "graph", "grasp", "grass", "grate", "grave", "gravy", "grays", "graze",
    "great", "greed", "green", "greet", "grids", "grief", "grill", "grime",
    "grimy", "grind", "grins", "gripe", "grist", "grits", "groan", "groin",
    "groom", "grope", "gross", "group", "grout", "grove", "growl", "grown",
    "grows", "grubs", "gruff", "grunt", "guard", "guava", "guess", "guest",
    "guide", "guild", "guilt", "guise", "gulch", "gulfs", "gulls", "gulps",
    "gumbo", "gummy", "gunky", "gusts", "gusty", "gypsy", "habit", "hacks",
    "haiku", "hairs", "hairy", "halts", "halve", "hands", "handy", "hangs",
    "happy", "hardy", "harem", "hares", "harks", "harms", "harsh", "haste",
    "hasty", "hated", "hater", "hates", "hauls", "haunt", "haven", "havoc",
    "hawks", "hazel", "heads", "heals", "heaps", "hears", "heart", "heath",
    "heats", "heave", "heavy", "hedge", "heeds", "heels", "hefty", "heirs",
    "heist", "helix", "hello", "helps", "hence", "henna", "herbs", "herds",
    "heron", "hertz", "hexed", "hexes", "hider", "hides", "hiked", "hiker",
    "hikes", "hills", "hilly", "hilts", "hinds", "hinge", "hints", "hippo",
    "hippy", "hired", "hires", "hitch", "hives", "hoard", "hoary", "hobby",
    "hocks", "hoist", "holds", "holes", "holly", "homed", "homer", "homes",
    "hones", "honey", "honks", "honor", "hoods", "hoofs", "hooks", "hoops",
    "hoots", "hoped", "hopes", "hoppy", "horde", "horns", "horny", "horse",
    "hosed", "hoses", "hosts", "hotel", "hound", "hours", "house", "hovel",
    "hover", "howdy", "howls", "huffs", "huffy", "hulks", "hulky", "hulls",
    "human", "humid", "humor", "humps", "humus", "hunch", "hunks", "hunky",
    "hunts", "hurls", "hurry", "hurts", "husky", "hutch", "hyena", "hymns",
    "hyper", "hypes", "icily", "icing", "icons", "ideal", "ideas", "idyll",
    "igloo", "image", "imbue", "imply", "inane", "inbox", "incur", "index",
    "indie", "inept", "inert", "infer", "infra", "ingot", "inlet", "inner",
    "input", "inset", "inter", "intro", "inure", "irate", "irked", "irony",
    "islet", "issue", "itchy", "items", "ivory", "jacks", "jaded", "jades",
    "jails", "jaunt", "jawed", "jazzy", "jeans", "jeeps", "jeers", "jello",
    "jelly", "jests", "jetty", "jewel", "jiffy", "jilts", "jinks", "jives",
    "jocks", "joeys", "joins", "joint", "joist", "joked", "joker", "jokes",
    "jolly", "jolts", "joule", "joust", "jowls", "judge", "juice", "juicy",
    "jumbo", "jumps", "jumpy", "junco", "junks", "junky", "juror", "jutes",
    "kayak", "keeps", "kendo", "keyed", "khaki", "kicks", "kiddo", "kiddy",
    "kills", "kilns", "kilos", "kilts", "kinds", "kings", "kinks", "kinky",
    "kiosk", "kited", "kites", "kitty", "kiwis", "knack", "knave", "knead",
    "kneed", "kneel", "knees", "knelt", "knife", "knish", "knits", "knobs",
    "knock", "knoll", "knots", "known", "knows", "knurl", "koala", "kudos",
    "label", "labor", "laced", "laces", "lacks", "laden", "ladle", "lager",
    "laird", "lairs", "lakes", "lamps", "lanai", "lance", "lands", "lanky",
    "larch", "lards", "large", "largo", "larks", "larva", "laser", "lasso",
    "lasts", "latch", "later", "lates", "lathe", "laths", "lauds", "laugh",
    "lawns", "laxer", "laxly", "layer", "leach", "leads", "leafy", "leaks",
    "leaky", "leans", "leant", "leaps", "leapt", "learn", "lease", "leash",
    "least", "leave", "ledge", "leech", "leeks", "leers", "lefts", "lefty",
    "legal", "leggy", "legit", "lemon", "lemur", "lends", "leper", "letup",
    "levee", "level", "lever", "levin", "liars", "licit", "licks", "lidos",
    "liege", "liens", "liers", "lieus", "lifer", "lifts", "light", "liner",
    "links", "logic", "loops", "lucky", "macro", "magic", "maker", "mango",
    "maple", "media", "melon", "merge", "metro", "micro", "miner", "money",
    "muddy", "newly", "nexus", "noble", "nodes", "ocean", "olive", "omega",
    "orbit", "order", "otter", "panda", "parse", "peach", "pearl", "peppy",
    "pixel", "ports", "power", "price", "prime", "prize", "promo", "props",
    "proxy", "pulse", "query", "quest", "queue", "quick", "radar", "rally",
    "rapid", "raven", "reach", "react", "redux", "rider", "river", "route",
    "royal", "rusty", "sales", "scale", "scope", "shark", "sharp", "shine",
    "shops", "sigma", "sleek", "slick", "smart", "solar", "solid", "space",
    "spark", "specs", "speed", "spice", "stack", "start", "state", "stock",
    "stone", "store", "storm", "sugar", "sunny", "super", "surge", "swift",
    "taker", "tally", "tango", "teach", "tempo", "tests", "theta", "think",
    "tiger", "timer", "titan", "toast", "trade", "trait", "trees", "truly",
    "trust", "turbo", "types", "ultra", "unify", "unity", "urban", "value",
    "video", "viper", "vital", "vivid", "water", "whale", "works", "worth",
    "yield", "zebra", "zippy",
];

/// Informal, colloquial words (`fun_pattern` tag)
pub const FUN_WORDS: &[&str] = &[
    "buddy", "catty", "curry", "daddy", "daffy", "daily", "dairy", "dandy",
    "dilly", "ditzy", "dizzy", "dotty", "droll", "dummy", "dumpy", "fatty",
    "fluky", "foamy", "foggy", "folky", "folly", "forty", "fully", "furry",
    "fuzzy", "gabby", "gaily", "gassy", "giddy", "girly", "godly", "golly",
    "gooey", "goofy", "gotta", "gravy", "grimy", "gummy", "gunky", "gusty",
    "hairy", "hammy", "handy", "hanky", "happy", "hardy", "harpy", "hasty",
    "heady", "hefty", "hippy", "hoagy", "hokey", "holly", "homey", "honey",
    "honky", "hooey", "hooky", "hoppy", "horsy", "hotly", "huffy", "hulky",
    "humid", "humpy", "hunky", "hurry", "husky", "icily", "igloo", "imply",
    "inlay", "ivory", "jazzy", "jelly", "jerky", "jetty", "jewel", "jiffy",
    "jokey", "jolly", "jowly", "kappa", "kayak", "kebab", "kicky", "kiddy",
    "kinda", "kitty", "kooky", "krazy", "loopy", "messy", "missy", "moody",
    "mopey", "nasty", "perky", "picky", "pithy", "potty", "puppy", "putty",
    "sassy", "silly", "soggy", "sorry", "spicy", "wimpy", "zippy",
];
